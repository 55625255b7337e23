use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};
use std::sync::atomic::{AtomicUsize, Ordering};

pub use taskit::command::command_parser::CommandParser;
pub use taskit::token::token_strategy::CommandTokenizer;
use taskit::config::Config;
use taskit::core::context::AppContext;
use taskit::core::store::TaskStore;
use taskit::logging::Logger;

pub fn binary_path() -> String {
    let raw = PathBuf::from(env!("CARGO_BIN_EXE_taskit"));
    if raw.is_absolute() {
        return raw.to_string_lossy().to_string();
    }
    let from_manifest = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(&raw);
    if from_manifest.exists() {
        return from_manifest.to_string_lossy().to_string();
    }
    raw.to_string_lossy().to_string()
}

static COUNTER: AtomicUsize = AtomicUsize::new(0);

pub fn make_temp_dir(prefix: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "{prefix}-{}-{}",
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos(),
        COUNTER.fetch_add(1, Ordering::Relaxed)
    ));
    let _ = fs::create_dir_all(&dir);
    dir
}

pub fn write_config(dir: &PathBuf, file_logging: &str) {
    let cfg = format!(
        r#"{{
      "file_logging_enabled": {{ "value": "{}", "description": "file logging" }}
    }}"#,
        file_logging
    );
    fs::write(dir.join("config.json"), cfg).unwrap();
}

pub fn run_with_input(dir: &PathBuf, input: &str) -> Output {
    let mut child = Command::new(binary_path())
        .current_dir(dir)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn binary");

    child
        .stdin
        .as_mut()
        .unwrap()
        .write_all(input.as_bytes())
        .unwrap();

    child.wait_with_output().unwrap()
}

pub fn run_without_input(dir: &PathBuf) -> Output {
    Command::new(binary_path())
        .current_dir(dir)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::piped())
        .output()
        .expect("failed to run binary")
}

fn strip_ansi(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '\u{1B}' && matches!(chars.peek(), Some('[')) {
            let _ = chars.next();
            for nc in chars.by_ref() {
                if nc.is_ascii_alphabetic() {
                    break;
                }
            }
            continue;
        }
        out.push(c);
    }

    out
}

/// Output lines with ANSI styling, prompt prefixes, and blank lines removed.
pub fn normalized_lines(buf: &[u8]) -> Vec<String> {
    String::from_utf8_lossy(buf)
        .lines()
        .map(|l| {
            let stripped = strip_ansi(l);
            let trimmed = stripped.trim();
            if let Some(rest) = trimmed.strip_prefix('>') {
                rest.trim().to_string()
            } else {
                trimmed.to_string()
            }
        })
        .filter(|l| !l.is_empty())
        .collect()
}

pub fn build_context(dir: &PathBuf) -> AppContext {
    let config_path = dir.join("config.json");
    let logs_dir = dir.join("logs");
    let config = Config::load_from(&config_path).expect("config should load");
    let logger = Logger::new();
    logger.set_log_dir(&logs_dir);
    logger.set_file_logging_enabled(config.file_logging_enabled());
    AppContext {
        config,
        store: TaskStore::new(),
        logger,
        startup_displayed: false,
        config_path,
        logs_dir,
    }
}

pub fn execute_command(
    line: &str,
    tokenizer: &CommandTokenizer,
    command_parser: &CommandParser,
    ctx: &mut AppContext,
) {
    let (command, rest) = match line.split_once(char::is_whitespace) {
        Some((head, rest)) => (head.to_lowercase(), rest),
        None => (line.to_lowercase(), ""),
    };

    let args = tokenizer.tokenize(&command, rest);
    let cmd = command_parser
        .parse(&command, &args)
        .unwrap_or_else(|e| panic!("command parse failed for '{}': {}", line, e));
    cmd.execute(ctx)
        .unwrap_or_else(|e| panic!("command execute failed for '{}': {}", line, e));
}

pub fn read_log_contents(dir: &PathBuf) -> Option<String> {
    let logs_dir = dir.join("logs");
    let mut entries = fs::read_dir(&logs_dir).ok()?;
    let entry = entries.find_map(|e| e.ok())?;
    fs::read_to_string(entry.path()).ok()
}

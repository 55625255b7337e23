#[derive(Clone, Copy)]
enum State {
    Normal,
    InDoubleQuote,
    InSingleQuote,
}

/// Splits a raw argument string on runs of whitespace.
pub fn whitespace_tokens(raw: &str) -> Vec<String> {
    raw.split_whitespace().map(str::to_string).collect()
}

/// Splits a raw argument string into tokens, honoring quoted runs.
///
/// A quote character opens a run only at a token boundary, and only when a
/// matching close quote exists later in the input; anywhere else it is an
/// ordinary character and stays in the token. A quoted run keeps its interior
/// verbatim (including whitespace), may be empty, and always yields a token.
/// Input immediately after a close quote starts a new token.
pub fn quoted_tokens(raw: &str) -> Vec<String> {
    let chars: Vec<char> = raw.chars().collect();
    let mut tokens = Vec::new();
    let mut buf = String::new();
    let mut in_token = false;
    let mut state = State::Normal;

    for i in 0..chars.len() {
        let c = chars[i];
        match state {
            State::Normal => {
                if c.is_whitespace() {
                    if in_token {
                        tokens.push(std::mem::take(&mut buf));
                        in_token = false;
                    }
                } else if !in_token && (c == '"' || c == '\'') && chars[i + 1..].contains(&c) {
                    state = if c == '"' {
                        State::InDoubleQuote
                    } else {
                        State::InSingleQuote
                    };
                    in_token = true;
                } else {
                    buf.push(c);
                    in_token = true;
                }
            }
            State::InDoubleQuote if c == '"' => {
                tokens.push(std::mem::take(&mut buf));
                in_token = false;
                state = State::Normal;
            }
            State::InSingleQuote if c == '\'' => {
                tokens.push(std::mem::take(&mut buf));
                in_token = false;
                state = State::Normal;
            }
            State::InDoubleQuote | State::InSingleQuote => buf.push(c),
        }
    }

    if in_token {
        tokens.push(buf);
    }
    tokens
}

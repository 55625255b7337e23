use crate::core::models::{Task, TIMESTAMP_FORMAT};
use crate::ui::width_util::WidthUtil;
use std::io;
use std::io::Write;

const LIST_RULE_WIDTH: usize = 80;
const DETAIL_INDENT: &str = "      ";

/// Renders the task listing block: status glyph, id and title on one line,
/// indented detail lines underneath.
#[derive(Debug, Default, Clone)]
pub struct DisplayManager {
    util: WidthUtil,
}

impl DisplayManager {
    pub fn new() -> Self {
        Self {
            util: WidthUtil::default(),
        }
    }

    pub fn render_task_list<W: Write>(&self, tasks: &[Task], out: &mut W) -> io::Result<()> {
        if tasks.is_empty() {
            writeln!(out, "No tasks found.")?;
            return Ok(());
        }

        let rule = "-".repeat(self.rule_width());
        writeln!(out)?;
        writeln!(out, "Your Tasks:")?;
        writeln!(out, "{rule}")?;
        for task in tasks {
            self.render_task(task, out)?;
        }
        writeln!(out, "{rule}")?;
        Ok(())
    }

    pub fn display_task_list(&self, tasks: &[Task]) {
        let mut stdout = io::stdout();
        let _ = self.render_task_list(tasks, &mut stdout);
    }

    fn render_task<W: Write>(&self, task: &Task, out: &mut W) -> io::Result<()> {
        let status = if task.completed { "✓" } else { "○" };
        writeln!(out, "{status} [{}] {}", task.id, task.title)?;
        // An empty description is hidden just like a missing one.
        if let Some(description) = task.description.as_deref().filter(|d| !d.is_empty()) {
            writeln!(out, "{DETAIL_INDENT}Description: {description}")?;
        }
        writeln!(
            out,
            "{DETAIL_INDENT}Created: {}",
            task.created_at.format(TIMESTAMP_FORMAT)
        )?;
        if task.was_updated() {
            writeln!(
                out,
                "{DETAIL_INDENT}Updated: {}",
                task.updated_at.format(TIMESTAMP_FORMAT)
            )?;
        }
        writeln!(out)?;
        Ok(())
    }

    /// Full width on the usual 80-column terminal, narrower when the
    /// terminal is.
    fn rule_width(&self) -> usize {
        LIST_RULE_WIDTH.min(self.util.terminal_width())
    }
}

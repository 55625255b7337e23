use crate::command::manual::HelpCatalog;
use crate::core::context::AppContext;
use crate::core::types::TaskStatusAction;
use crate::errors::{Error, Result, require_parse};
use crate::logging::LogTarget;
use crate::ui::display_manager::DisplayManager;

pub struct CommandCore<'a> {
    pub args: &'a [String],
    pub min_args: usize,
}

impl<'a> CommandCore<'a> {
    pub fn new(args: &'a [String], min_args: usize) -> Self {
        Self { args, min_args }
    }
}

mod sealed {
    use super::CommandCore;

    pub trait Sealed<'a> {
        fn core(&self) -> &CommandCore<'a>;
    }
}

pub trait Command<'a>: sealed::Sealed<'a> {
    fn usage(&self) -> String;
    fn perform(&self, ctx: &mut AppContext) -> Result<()>;

    /// Arity gate in front of `perform`: handlers can assume their required
    /// positional arguments are present.
    fn execute(&self, ctx: &mut AppContext) -> Result<()> {
        let core = self.core();
        if core.args.len() < core.min_args {
            return Err(Error::parse(self.usage()));
        }
        self.perform(ctx)
    }
}

pub type CommandDyn<'a> = Box<dyn Command<'a> + 'a>;

fn parse_task_id(raw: &str) -> Result<i32> {
    require_parse(raw.trim().parse::<i32>().ok(), "Task ID must be a number")
}

pub struct AddCommand<'a> {
    core: CommandCore<'a>,
}

impl<'a> AddCommand<'a> {
    pub fn new(args: &'a [String]) -> Self {
        Self {
            core: CommandCore::new(args, 1),
        }
    }
}

impl<'a> sealed::Sealed<'a> for AddCommand<'a> {
    fn core(&self) -> &CommandCore<'a> {
        &self.core
    }
}

impl<'a> Command<'a> for AddCommand<'a> {
    fn usage(&self) -> String {
        r#"Usage: add "task title" "optional description""#.into()
    }

    fn perform(&self, ctx: &mut AppContext) -> Result<()> {
        let title = self.core.args[0].clone();
        let description = self.core.args.get(1).cloned();
        match ctx.store.add(title, description) {
            Ok(task) => {
                let line = format!(
                    "Task added successfully! ID: {}, Title: {}",
                    task.id, task.title
                );
                ctx.logger.info(line, LogTarget::ConsoleAndFile);
            }
            Err(err) => {
                ctx.logger
                    .error(format!("Error adding task: {err}"), LogTarget::ConsoleAndFile);
            }
        }
        Ok(())
    }
}

pub struct ListCommand<'a> {
    core: CommandCore<'a>,
}

impl<'a> ListCommand<'a> {
    pub fn new(args: &'a [String]) -> Self {
        Self {
            core: CommandCore::new(args, 0),
        }
    }
}

impl<'a> sealed::Sealed<'a> for ListCommand<'a> {
    fn core(&self) -> &CommandCore<'a> {
        &self.core
    }
}

impl<'a> Command<'a> for ListCommand<'a> {
    fn usage(&self) -> String {
        "Usage: list".into()
    }

    fn perform(&self, ctx: &mut AppContext) -> Result<()> {
        DisplayManager::new().display_task_list(ctx.store.tasks());
        Ok(())
    }
}

pub struct UpdateCommand<'a> {
    core: CommandCore<'a>,
}

impl<'a> UpdateCommand<'a> {
    pub fn new(args: &'a [String]) -> Self {
        Self {
            core: CommandCore::new(args, 2),
        }
    }
}

impl<'a> sealed::Sealed<'a> for UpdateCommand<'a> {
    fn core(&self) -> &CommandCore<'a> {
        &self.core
    }
}

impl<'a> Command<'a> for UpdateCommand<'a> {
    fn usage(&self) -> String {
        r#"Usage: update <id> "new title" "optional new description""#.into()
    }

    fn perform(&self, ctx: &mut AppContext) -> Result<()> {
        let id = parse_task_id(&self.core.args[0])?;
        let title = self.core.args[1].clone();
        let description = self.core.args.get(2).cloned();
        match ctx.store.update(id, Some(title), description)? {
            Some(task) => {
                let line = format!("Task {} updated successfully!", task.id);
                ctx.logger.info(line, LogTarget::ConsoleAndFile);
            }
            None => {
                ctx.logger.info(
                    format!("Task with ID {id} not found"),
                    LogTarget::ConsoleAndFile,
                );
            }
        }
        Ok(())
    }
}

pub struct DeleteCommand<'a> {
    core: CommandCore<'a>,
}

impl<'a> DeleteCommand<'a> {
    pub fn new(args: &'a [String]) -> Self {
        Self {
            core: CommandCore::new(args, 1),
        }
    }
}

impl<'a> sealed::Sealed<'a> for DeleteCommand<'a> {
    fn core(&self) -> &CommandCore<'a> {
        &self.core
    }
}

impl<'a> Command<'a> for DeleteCommand<'a> {
    fn usage(&self) -> String {
        "Usage: delete <id>".into()
    }

    fn perform(&self, ctx: &mut AppContext) -> Result<()> {
        let id = parse_task_id(&self.core.args[0])?;
        if ctx.store.delete(id) {
            ctx.logger.info(
                format!("Task {id} deleted successfully!"),
                LogTarget::ConsoleAndFile,
            );
        } else {
            ctx.logger.info(
                format!("Task with ID {id} not found"),
                LogTarget::ConsoleAndFile,
            );
        }
        Ok(())
    }
}

pub struct SetCompletedCommand<'a> {
    core: CommandCore<'a>,
    action: TaskStatusAction,
}

impl<'a> SetCompletedCommand<'a> {
    pub fn new(args: &'a [String], action: TaskStatusAction) -> Self {
        Self {
            core: CommandCore::new(args, 1),
            action,
        }
    }
}

impl<'a> sealed::Sealed<'a> for SetCompletedCommand<'a> {
    fn core(&self) -> &CommandCore<'a> {
        &self.core
    }
}

impl<'a> Command<'a> for SetCompletedCommand<'a> {
    fn usage(&self) -> String {
        format!("Usage: {} <id>", self.action)
    }

    fn perform(&self, ctx: &mut AppContext) -> Result<()> {
        let id = parse_task_id(&self.core.args[0])?;
        match ctx.store.set_completed(id, self.action.as_completed()) {
            Some(task) => {
                let line = format!("Task {} marked as {}!", task.id, self.action);
                ctx.logger.info(line, LogTarget::ConsoleAndFile);
            }
            None => {
                ctx.logger.info(
                    format!("Task with ID {id} not found"),
                    LogTarget::ConsoleAndFile,
                );
            }
        }
        Ok(())
    }
}

pub struct HelpCommand<'a> {
    core: CommandCore<'a>,
}

impl<'a> HelpCommand<'a> {
    pub fn new(args: &'a [String]) -> Self {
        Self {
            core: CommandCore::new(args, 0),
        }
    }
}

impl<'a> sealed::Sealed<'a> for HelpCommand<'a> {
    fn core(&self) -> &CommandCore<'a> {
        &self.core
    }
}

impl<'a> Command<'a> for HelpCommand<'a> {
    fn usage(&self) -> String {
        "Usage: help".into()
    }

    fn perform(&self, ctx: &mut AppContext) -> Result<()> {
        let page = HelpCatalog::new().command_page();
        ctx.logger.info(page.render(), LogTarget::ConsoleOnly);
        Ok(())
    }
}

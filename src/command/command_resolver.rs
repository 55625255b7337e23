use crate::command::commands::{
    AddCommand, CommandDyn, DeleteCommand, HelpCommand, ListCommand, SetCompletedCommand,
    UpdateCommand,
};
use crate::core::types::{GlobalAction, TaskEditAction, TaskStatusAction};
use crate::errors::Result;

pub trait CommandResolver {
    fn can_resolve(&self, command: &str) -> bool;
    fn resolve<'a>(&self, command: &str, args: &'a [String]) -> Result<CommandDyn<'a>>;
}

pub struct TaskEditResolver;

impl CommandResolver for TaskEditResolver {
    fn can_resolve(&self, command: &str) -> bool {
        TaskEditAction::try_from(command).is_ok()
    }

    fn resolve<'a>(&self, command: &str, args: &'a [String]) -> Result<CommandDyn<'a>> {
        let action = TaskEditAction::try_from(command)?;
        match action {
            TaskEditAction::Add => Ok(Box::new(AddCommand::new(args))),
            TaskEditAction::Update => Ok(Box::new(UpdateCommand::new(args))),
            TaskEditAction::Delete => Ok(Box::new(DeleteCommand::new(args))),
        }
    }
}

pub struct TaskStatusResolver;

impl CommandResolver for TaskStatusResolver {
    fn can_resolve(&self, command: &str) -> bool {
        TaskStatusAction::try_from(command).is_ok()
    }

    fn resolve<'a>(&self, command: &str, args: &'a [String]) -> Result<CommandDyn<'a>> {
        let action = TaskStatusAction::try_from(command)?;
        Ok(Box::new(SetCompletedCommand::new(args, action)))
    }
}

pub struct GlobalResolver;

impl CommandResolver for GlobalResolver {
    fn can_resolve(&self, command: &str) -> bool {
        GlobalAction::try_from(command).is_ok()
    }

    fn resolve<'a>(&self, command: &str, args: &'a [String]) -> Result<CommandDyn<'a>> {
        let action = GlobalAction::try_from(command)?;
        match action {
            GlobalAction::List => Ok(Box::new(ListCommand::new(args))),
            GlobalAction::Help => Ok(Box::new(HelpCommand::new(args))),
        }
    }
}

use crate::command::command_resolver::{
    CommandResolver, GlobalResolver, TaskEditResolver, TaskStatusResolver,
};
use crate::command::commands::CommandDyn;
use crate::errors::{Error, Result};

pub struct CommandParser {
    registry: Vec<Box<dyn CommandResolver>>,
}

impl CommandParser {
    pub fn new() -> Self {
        Self {
            registry: vec![
                Box::new(TaskEditResolver),
                Box::new(TaskStatusResolver),
                Box::new(GlobalResolver),
            ],
        }
    }

    pub fn parse<'a>(&self, command: &str, args: &'a [String]) -> Result<CommandDyn<'a>> {
        for r in &self.registry {
            if r.can_resolve(command) {
                return r.resolve(command, args);
            }
        }
        Err(Error::UnknownCommand(command.to_string()))
    }
}

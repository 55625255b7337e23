use crate::command::command_parser::CommandParser;
use crate::command::commands::CommandDyn;
use crate::core::context::AppContext;
use crate::errors::{Error, Result};
use crate::logging::{LogTarget, Logger};
use crate::prompter::models::{Flow, FlowCtrl};
use crate::token::token_strategy::CommandTokenizer;
use crate::ui::chrome::UiChrome;

pub struct MainFlow<'a> {
    ctx: &'a mut AppContext,
    tokenizer: CommandTokenizer,
    command_parser: CommandParser,
    logger: Logger,
}

impl<'a> MainFlow<'a> {
    pub fn new(ctx: &'a mut AppContext) -> Self {
        let logger = ctx.logger.clone();
        Self {
            ctx,
            tokenizer: CommandTokenizer::new(),
            command_parser: CommandParser::new(),
            logger,
        }
    }
}

impl<'a> Flow for MainFlow<'a> {
    fn render(&mut self) -> Result<()> {
        self.print_startup();
        self.print_prompt();
        Ok(())
    }

    fn handle_input(&mut self, input: &str) -> Result<FlowCtrl> {
        let line = input.trim();
        if line.is_empty() {
            return Ok(FlowCtrl::Continue);
        }

        let (command, rest) = Self::split_command_line(line);
        if Self::is_exit_command(&command) {
            return Ok(FlowCtrl::Finish);
        }

        let args = self.tokenizer.tokenize(&command, rest);

        let cmd = match self.resolve_command(&command, &args) {
            Some(cmd) => cmd,
            None => return Ok(FlowCtrl::Continue),
        };

        self.log_command_run(line);
        self.execute_command(cmd);

        Ok(FlowCtrl::Continue)
    }

    fn finish(&mut self) -> Result<()> {
        println!("Goodbye!");
        Ok(())
    }
}

impl<'a> MainFlow<'a> {
    fn print_startup(&mut self) {
        if self.ctx.startup_displayed {
            return;
        }
        UiChrome::new().print_banner();
        println!();
        println!("Welcome to the Todo Console App!");
        println!("Type 'help' for available commands or 'quit' to exit.");
        self.ctx.startup_displayed = true;
    }

    fn print_prompt(&self) {
        UiChrome::new().print_prompt("\n> ");
    }

    /// First whitespace run separates the command name from its argument
    /// text. The remainder stays raw so quoted runs keep their spacing.
    fn split_command_line(line: &str) -> (String, &str) {
        match line.split_once(char::is_whitespace) {
            Some((head, rest)) => (head.to_lowercase(), rest),
            None => (line.to_lowercase(), ""),
        }
    }

    fn is_exit_command(command: &str) -> bool {
        matches!(command, "quit" | "exit")
    }

    fn resolve_command<'b>(&self, command: &str, args: &'b [String]) -> Option<CommandDyn<'b>> {
        match self.command_parser.parse(command, args) {
            Ok(cmd) => Some(cmd),
            Err(err) => {
                self.logger
                    .error(err.to_string(), LogTarget::ConsoleAndFile);
                None
            }
        }
    }

    fn log_command_run(&self, line: &str) {
        self.logger
            .info(format!("Command run: {}", line), LogTarget::FileOnly);
    }

    fn execute_command(&mut self, cmd: CommandDyn<'_>) {
        if let Err(err) = cmd.execute(self.ctx) {
            self.handle_command_error(err);
        }
    }

    /// Usage and id mistakes print as-is; anything else a handler lets
    /// escape is wrapped in the generic dispatch message.
    fn handle_command_error(&self, err: Error) {
        match err {
            Error::Parse(msg) => self.logger.error(msg, LogTarget::ConsoleAndFile),
            err => self.logger.error(
                format!("Error executing command: {err}"),
                LogTarget::ConsoleAndFile,
            ),
        }
    }
}

#[derive(Debug, Clone)]
pub struct HelpSection {
    title: String,
    body: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct HelpPage {
    name: String,
    summary: String,
    sections: Vec<HelpSection>,
}

impl HelpPage {
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.write_section(
            "NAME",
            &[format!("{} - {}", self.name, self.summary)],
            &mut out,
        );
        for section in &self.sections {
            self.write_section(&section.title, &section.body, &mut out);
        }
        out.trim_end().to_string()
    }

    fn write_section(&self, title: &str, lines: &[String], out: &mut String) {
        out.push_str(&title.to_uppercase());
        out.push('\n');
        for line in lines {
            out.push_str("  ");
            out.push_str(line);
            out.push('\n');
        }
        out.push('\n');
    }
}

pub struct HelpPageBuilder {
    name: String,
    summary: String,
    sections: Vec<HelpSection>,
}

impl HelpPageBuilder {
    pub fn new(name: impl Into<String>, summary: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            summary: summary.into(),
            sections: Vec::new(),
        }
    }

    pub fn section(mut self, title: &str, body: Vec<String>) -> Self {
        self.sections.push(HelpSection {
            title: title.to_string(),
            body,
        });
        self
    }

    pub fn build(self) -> HelpPage {
        HelpPage {
            name: self.name,
            summary: self.summary,
            sections: self.sections,
        }
    }
}

pub struct HelpCatalog;

impl HelpCatalog {
    pub fn new() -> Self {
        Self
    }

    /// The one static reference page the `help` command prints.
    pub fn command_page(&self) -> HelpPage {
        HelpPageBuilder::new("taskit", "Single-session task list console.")
            .section("COMMANDS", command_lines())
            .section("EXAMPLES", example_lines())
            .section(
                "NOTES",
                vec![
                    "Titles and descriptions with spaces must be quoted.".to_string(),
                    "Command names are case-insensitive.".to_string(),
                ],
            )
            .build()
    }
}

fn command_lines() -> Vec<String> {
    [
        (r#"add "task title" "optional description""#, "Add a new task"),
        ("list", "Display all tasks"),
        (
            r#"update <id> "new title" "new description""#,
            "Update a task",
        ),
        ("delete <id>", "Delete a task"),
        ("complete <id>", "Mark task as complete"),
        ("incomplete <id>", "Mark task as incomplete"),
        ("help", "Show this help message"),
        ("quit/exit", "Exit the application"),
    ]
    .into_iter()
    .map(|(usage, summary)| format!("{usage:<41} - {summary}"))
    .collect()
}

fn example_lines() -> Vec<String> {
    vec![
        r#"add "Buy groceries" "Milk, eggs, bread""#.to_string(),
        "list".to_string(),
        r#"update 1 "Buy groceries and fruits" "Milk, eggs, bread, apples""#.to_string(),
        "delete 1".to_string(),
        "complete 1".to_string(),
    ]
}

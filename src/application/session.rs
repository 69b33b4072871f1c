//! Interactive session: owns every widget and dispatches commands
//!
//! Wires up the simulators and page collaborators from settings.

use tracing::{debug, info, instrument};

use crate::application::command::{Command, TreeAction, HELP};
use crate::application::services::{BinaryTreeDemo, StackSimulator};
use crate::application::{ApplicationResult, Status};
use crate::config::Settings;
use crate::domain::{current_page, NavBar, RevealCards};

/// What the presentation layer should show after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub status: Status,
    /// Extra text to print below the status (stack contents, tree shape, ...)
    pub display: Option<String>,
    pub quit: bool,
}

impl Response {
    fn new(status: Status) -> Self {
        Self {
            status,
            display: None,
            quit: false,
        }
    }

    fn with_display(mut self, display: impl Into<String>) -> Self {
        self.display = Some(display.into());
        self
    }
}

/// Single owner of all page-local state.
pub struct Session {
    settings: Settings,
    stack: StackSimulator,
    tree: BinaryTreeDemo,
    nav: NavBar,
    cards: RevealCards,
    page: String,
}

impl Session {
    pub fn new(settings: Settings) -> ApplicationResult<Self> {
        let stack = StackSimulator::from_settings(&settings.stack)?;
        let tree = BinaryTreeDemo::from_settings(&settings.tree);
        let mut nav = NavBar::new(settings.site.pages.iter().cloned());
        let page = settings.site.default_page.clone();
        nav.highlight(&page);
        let cards = RevealCards::new(settings.site.cards.iter().cloned());

        Ok(Self {
            settings,
            stack,
            tree,
            nav,
            cards,
            page,
        })
    }

    /// Navigate to a page.
    ///
    /// Highlights the matching navigation link. Entering the simulator page
    /// initializes both simulators.
    #[instrument(level = "debug", skip(self))]
    pub fn open(&mut self, path: &str) -> Response {
        let page = current_page(path, &self.settings.site.default_page).to_string();
        let active = self.nav.highlight(&page);
        debug!("open: page={} active_links={}", page, active);

        if page == self.settings.site.simulator_page {
            info!("initializing simulators on {}", page);
            self.stack.reset();
            self.tree.reset();
        }

        let status = Status::neutral(format!("Opened {}", page));
        self.page = page;
        Response::new(status).with_display(self.nav.to_string())
    }

    #[instrument(level = "debug", skip(self))]
    pub fn execute(&mut self, command: Command) -> Response {
        match command {
            Command::Push(value) => {
                let report = self.stack.push(&value);
                self.stack_response(report.status)
            }
            Command::Pop => {
                let report = self.stack.pop();
                self.stack_response(report.status)
            }
            Command::Peek => {
                let report = self.stack.peek();
                self.stack_response(report.status)
            }
            Command::Reset => {
                let report = self.stack.reset();
                self.stack_response(report.status)
            }
            Command::Show => self.stack_response(Status::default()),
            Command::Tree(action) => self.tree_response(action),
            Command::Nav(path) => self.open(&path),
            Command::Card(id) => match self.cards.toggle(&id) {
                Some(state) => Response::new(Status::neutral(format!("Card {}: {}", id, state))),
                None => Response::new(Status::neutral(format!("No card named {}.", id))),
            },
            Command::Help => Response::new(Status::default()).with_display(HELP),
            Command::Quit => Response {
                quit: true,
                ..Response::new(Status::default())
            },
        }
    }

    fn stack_response(&self, status: Status) -> Response {
        Response::new(status).with_display(self.stack.render())
    }

    fn tree_response(&mut self, action: TreeAction) -> Response {
        match action {
            TreeAction::Traverse(kind) => Response::new(self.tree.traverse(kind).status),
            TreeAction::Reset => Response::new(self.tree.reset().status),
            TreeAction::Clear => Response::new(self.tree.clear().status),
            TreeAction::Show => Response::new(Status::default()).with_display(self.tree.describe()),
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn stack(&self) -> &StackSimulator {
        &self.stack
    }

    pub fn tree(&self) -> &BinaryTreeDemo {
        &self.tree
    }

    pub fn nav(&self) -> &NavBar {
        &self.nav
    }

    pub fn cards(&self) -> &RevealCards {
        &self.cards
    }

    pub fn page(&self) -> &str {
        &self.page
    }
}

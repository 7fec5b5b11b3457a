//! Interactive browsing state machine.
//!
//! ```text
//! MainMenu ──manage──► CategoryList(kind) ──pick──► UnitList ──pick──► UnitActions
//!    ▲                      │  back / empty            │ back              │ back / delete
//!    └──────────────────────┘◄─────────────────────────┘◄──────────────────┘
//! ```
//!
//! [`Navigator::run`] drives the machine with a loop; every listing screen
//! re-scans the unit root so what is shown always matches the disk.

mod editor;
mod prompt;

pub use editor::{Editor, EditorError, SystemEditor};
pub use prompt::{DialoguerPrompter, PromptError, Prompter};

use std::path::{Path, PathBuf};

use disco_core::UnitKind;
use disco_units::{CategoryTree, ToggleOutcome, UnitError};

use crate::ui;

/// Unit roots and the extension the scanner looks for.
#[derive(Debug, Clone)]
pub struct UnitRoots {
    pub commands: PathBuf,
    pub events: PathBuf,
    pub extension: String,
}

impl UnitRoots {
    #[must_use]
    pub fn root(&self, kind: UnitKind) -> &Path {
        match kind {
            UnitKind::Commands => &self.commands,
            UnitKind::Events => &self.events,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    MainMenu,
    CategoryList(UnitKind),
    UnitList {
        kind: UnitKind,
        category: String,
    },
    UnitActions {
        kind: UnitKind,
        category: String,
        unit: PathBuf,
    },
}

/// How an interactive session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exit {
    Quit,
    /// The operator asked for the external creation wizard.
    CreateNew,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Goto(Screen),
    Exit(Exit),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MainChoice {
    Manage(UnitKind),
    CreateNew,
    Exit,
}

impl MainChoice {
    const ALL: [Self; 4] = [
        Self::Manage(UnitKind::Commands),
        Self::Manage(UnitKind::Events),
        Self::CreateNew,
        Self::Exit,
    ];

    const fn label(self) -> &'static str {
        match self {
            Self::Manage(UnitKind::Commands) => "⚙️  Manage Commands",
            Self::Manage(UnitKind::Events) => "📅 Manage Events",
            Self::CreateNew => "➕ Create New (Command/Event)",
            Self::Exit => "🚪 Exit",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum UnitAction {
    Edit,
    Pause,
    Resume,
    Delete,
    Back,
}

impl UnitAction {
    const ALL: [Self; 5] = [
        Self::Edit,
        Self::Pause,
        Self::Resume,
        Self::Delete,
        Self::Back,
    ];

    const fn label(self) -> &'static str {
        match self {
            Self::Edit => "✏️  Edit",
            Self::Pause => "⏸️  Pause/Disable",
            Self::Resume => "▶️  Resume/Enable",
            Self::Delete => "🗑️  Delete",
            Self::Back => "⬅️  Back",
        }
    }
}

const BACK_TO_MAIN: &str = "⬅️  Back to Main Menu";
const BACK: &str = "⬅️  Back";

pub struct Navigator<P, E> {
    roots: UnitRoots,
    prompter: P,
    editor: E,
}

impl<P: Prompter, E: Editor> Navigator<P, E> {
    pub const fn new(roots: UnitRoots, prompter: P, editor: E) -> Self {
        Self {
            roots,
            prompter,
            editor,
        }
    }

    /// Run from the main menu until the operator exits.
    ///
    /// # Errors
    ///
    /// Only prompt failures (for example a closed terminal) end the session
    /// with an error. Filesystem and editor failures are reported and the
    /// session continues.
    pub fn run(&mut self) -> Result<Exit, PromptError> {
        let mut screen = Screen::MainMenu;
        loop {
            match self.step(screen)? {
                Step::Goto(next) => screen = next,
                Step::Exit(exit) => return Ok(exit),
            }
        }
    }

    /// Render one screen, act on the answer, and return the transition.
    pub fn step(&mut self, screen: Screen) -> Result<Step, PromptError> {
        tracing::debug!(?screen, "rendering screen");
        match screen {
            Screen::MainMenu => self.main_menu(),
            Screen::CategoryList(kind) => self.category_list(kind),
            Screen::UnitList { kind, category } => self.unit_list(kind, category),
            Screen::UnitActions {
                kind,
                category,
                unit,
            } => self.unit_actions(kind, category, unit),
        }
    }

    #[cfg(test)]
    pub fn into_parts(self) -> (P, E) {
        (self.prompter, self.editor)
    }

    fn main_menu(&mut self) -> Result<Step, PromptError> {
        ui::banner();
        let items: Vec<String> = MainChoice::ALL
            .iter()
            .map(|choice| choice.label().to_string())
            .collect();
        let index = self.prompter.select("What would you like to do?", &items)?;

        Ok(match MainChoice::ALL.get(index).copied() {
            Some(MainChoice::Manage(kind)) => Step::Goto(Screen::CategoryList(kind)),
            Some(MainChoice::CreateNew) => Step::Exit(Exit::CreateNew),
            Some(MainChoice::Exit) | None => Step::Exit(Exit::Quit),
        })
    }

    fn category_list(&mut self, kind: UnitKind) -> Result<Step, PromptError> {
        let Some(tree) = self.load_tree(kind) else {
            return Ok(Step::Goto(Screen::MainMenu));
        };
        if tree.is_empty() {
            ui::warn(&format!("No {} found!", kind.as_str()));
            return Ok(Step::Goto(Screen::MainMenu));
        }

        let mut items: Vec<String> = tree
            .categories()
            .iter()
            .map(|category| format!("📁 {} ({} files)", category.name, category.units.len()))
            .collect();
        items.push(BACK_TO_MAIN.to_string());

        let index = self.prompter.select("Select a category:", &items)?;
        Ok(match tree.categories().get(index) {
            Some(category) => Step::Goto(Screen::UnitList {
                kind,
                category: category.name.clone(),
            }),
            None => Step::Goto(Screen::MainMenu),
        })
    }

    fn unit_list(&mut self, kind: UnitKind, category: String) -> Result<Step, PromptError> {
        let back = Step::Goto(Screen::CategoryList(kind));
        let Some(tree) = self.load_tree(kind) else {
            return Ok(Step::Goto(Screen::MainMenu));
        };
        let Some(units) = tree.get(&category).map(|found| &found.units) else {
            tracing::debug!(%category, "category no longer present");
            return Ok(back);
        };

        let mut items: Vec<String> = units
            .iter()
            .map(|unit| {
                if unit.marker.is_enabled() {
                    format!("📄 {}", unit.name)
                } else {
                    format!("📄 {} (paused)", unit.name)
                }
            })
            .collect();
        items.push(BACK.to_string());

        let prompt = format!("Select a {}:", kind.singular());
        let index = self.prompter.select(&prompt, &items)?;
        Ok(match units.get(index) {
            Some(unit) => Step::Goto(Screen::UnitActions {
                kind,
                category,
                unit: unit.path.clone(),
            }),
            None => back,
        })
    }

    fn unit_actions(
        &mut self,
        kind: UnitKind,
        category: String,
        unit: PathBuf,
    ) -> Result<Step, PromptError> {
        if !unit.is_file() {
            ui::warn(&format!("{} no longer exists", unit.display()));
            return Ok(Step::Goto(Screen::UnitList { kind, category }));
        }

        let file_name = display_name(&unit);
        let items: Vec<String> = UnitAction::ALL
            .iter()
            .map(|action| action.label().to_string())
            .collect();
        let prompt = format!("What would you like to do with {file_name}?");
        let index = self.prompter.select(&prompt, &items)?;
        let action = UnitAction::ALL.get(index).copied().unwrap_or(UnitAction::Back);

        match action {
            UnitAction::Edit => self.edit(&unit, &file_name),
            UnitAction::Pause => toggle(&unit, &file_name, true),
            UnitAction::Resume => toggle(&unit, &file_name, false),
            UnitAction::Delete => {
                if self.delete(&unit, &file_name)? {
                    return Ok(Step::Goto(Screen::UnitList { kind, category }));
                }
            }
            UnitAction::Back => return Ok(Step::Goto(Screen::UnitList { kind, category })),
        }

        Ok(Step::Goto(Screen::UnitActions {
            kind,
            category,
            unit,
        }))
    }

    fn edit(&mut self, unit: &Path, file_name: &str) {
        ui::info(&format!("Opening {file_name} in editor..."));
        match self.editor.open(unit) {
            Ok(()) => ui::success("File opened successfully!"),
            Err(error) => {
                tracing::warn!(%error, path = %unit.display(), "editor failed");
                ui::error(&format!("Could not open editor: {error}"));
            }
        }
    }

    /// Returns `true` when the file was removed.
    fn delete(&mut self, unit: &Path, file_name: &str) -> Result<bool, PromptError> {
        let prompt =
            format!("Are you sure you want to delete {file_name}? This cannot be undone!");
        if !self.prompter.confirm(&prompt)? {
            return Ok(false);
        }

        match std::fs::remove_file(unit) {
            Ok(()) => {
                ui::success(&format!("File deleted: {file_name}"));
                Ok(true)
            }
            Err(error) => {
                tracing::warn!(%error, path = %unit.display(), "delete failed");
                ui::error(&format!("Error deleting file: {error}"));
                Ok(false)
            }
        }
    }

    /// Fresh scan of the kind's root. `None` means "go back to the main
    /// menu"; the reason has already been reported.
    fn load_tree(&self, kind: UnitKind) -> Option<CategoryTree> {
        match disco_units::scan_tree(self.roots.root(kind), &self.roots.extension) {
            Ok(tree) => Some(tree),
            Err(UnitError::NotFound(_)) => {
                ui::error(&format!("{} directory not found!", kind.label()));
                None
            }
            Err(error) => {
                tracing::warn!(%error, %kind, "scan failed");
                ui::error(&format!("Could not read {}: {error}", kind.as_str()));
                None
            }
        }
    }
}

fn toggle(unit: &Path, file_name: &str, disabled: bool) {
    let verb = if disabled { "paused" } else { "resumed" };
    match disco_units::set_disabled(unit, disabled) {
        Ok(ToggleOutcome::Inserted | ToggleOutcome::Flipped(_)) => {
            ui::success(&format!("Unit {verb}: {file_name}"));
        }
        Ok(ToggleOutcome::Unchanged) => ui::info(&format!("{file_name} is already {verb}")),
        Ok(ToggleOutcome::NoDeclaration) => ui::warn(&format!(
            "No exported declaration found in {file_name}; nothing to pause"
        )),
        Err(error) => {
            tracing::warn!(%error, path = %unit.display(), "toggle failed");
            ui::error(&format!("Error toggling unit state: {error}"));
        }
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map_or_else(|| path.display().to_string(), |name| name.to_string_lossy().into_owned())
}

#[cfg(test)]
mod tests;

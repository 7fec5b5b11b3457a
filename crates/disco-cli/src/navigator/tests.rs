use std::collections::VecDeque;
use std::fs;

use disco_core::EnabledMarker;
use pretty_assertions::assert_eq;
use tempfile::TempDir;

use super::*;

#[derive(Debug, Clone, Copy)]
enum Answer {
    Select(usize),
    Confirm(bool),
}

/// Replays canned answers and records every prompt it was shown.
#[derive(Default)]
struct ScriptedPrompter {
    answers: VecDeque<Answer>,
    shown: Vec<(String, Vec<String>)>,
}

impl ScriptedPrompter {
    fn new(answers: impl IntoIterator<Item = Answer>) -> Self {
        Self {
            answers: answers.into_iter().collect(),
            shown: Vec::new(),
        }
    }
}

impl Prompter for ScriptedPrompter {
    fn select(&mut self, prompt: &str, items: &[String]) -> Result<usize, PromptError> {
        self.shown.push((prompt.to_string(), items.to_vec()));
        match self.answers.pop_front() {
            Some(Answer::Select(index)) => Ok(index),
            _ => Err(PromptError::NoAnswer(prompt.to_string())),
        }
    }

    fn confirm(&mut self, prompt: &str) -> Result<bool, PromptError> {
        self.shown.push((prompt.to_string(), Vec::new()));
        match self.answers.pop_front() {
            Some(Answer::Confirm(yes)) => Ok(yes),
            _ => Err(PromptError::NoAnswer(prompt.to_string())),
        }
    }
}

#[derive(Default)]
struct FakeEditor {
    opened: Vec<PathBuf>,
    fail: bool,
}

impl Editor for FakeEditor {
    fn open(&mut self, path: &Path) -> Result<(), EditorError> {
        self.opened.push(path.to_path_buf());
        if self.fail {
            Err(EditorError::Empty)
        } else {
            Ok(())
        }
    }
}

const NO_ANSWERS: [Answer; 0] = [];

const PING: &str = "module.exports = {\n    name: 'ping',\n};\n";
const BAN: &str = "module.exports = {\n    disabled: true,\n    name: 'ban',\n};\n";

struct Fixture {
    _temp: TempDir,
    roots: UnitRoots,
}

impl Fixture {
    fn new() -> Self {
        let temp = TempDir::new().expect("tempdir should create");
        let commands = temp.path().join("commands");
        fs::create_dir_all(commands.join("util")).expect("util dir");
        fs::create_dir_all(commands.join("mod")).expect("mod dir");
        fs::write(commands.join("util/ping.js"), PING).expect("ping");
        fs::write(commands.join("mod/ban.js"), BAN).expect("ban");

        let roots = UnitRoots {
            commands,
            events: temp.path().join("events"),
            extension: "js".to_string(),
        };
        Self { _temp: temp, roots }
    }

    fn ping(&self) -> PathBuf {
        self.roots.commands.join("util/ping.js")
    }

    fn ban(&self) -> PathBuf {
        self.roots.commands.join("mod/ban.js")
    }

    fn navigator(
        &self,
        answers: impl IntoIterator<Item = Answer>,
    ) -> Navigator<ScriptedPrompter, FakeEditor> {
        Navigator::new(
            self.roots.clone(),
            ScriptedPrompter::new(answers),
            FakeEditor::default(),
        )
    }
}

fn category_index(prompter: &ScriptedPrompter, name: &str) -> usize {
    let (_, items) = prompter
        .shown
        .iter()
        .find(|(prompt, _)| prompt == "Select a category:")
        .expect("category prompt shown");
    items
        .iter()
        .position(|item| item.starts_with(&format!("📁 {name} ")))
        .expect("category listed")
}

fn actions_for(kind: UnitKind, category: &str, unit: PathBuf) -> Screen {
    Screen::UnitActions {
        kind,
        category: category.to_string(),
        unit,
    }
}

#[test]
fn exit_from_main_menu_quits() {
    let fixture = Fixture::new();
    let mut nav = fixture.navigator([Answer::Select(3)]);
    assert_eq!(nav.run().expect("run"), Exit::Quit);
}

#[test]
fn create_new_ends_session_with_create_exit() {
    let fixture = Fixture::new();
    let mut nav = fixture.navigator([Answer::Select(2)]);
    assert_eq!(nav.run().expect("run"), Exit::CreateNew);
}

#[test]
fn missing_events_root_returns_to_main_menu() {
    let fixture = Fixture::new();
    let mut nav = fixture.navigator(NO_ANSWERS);
    let step = nav
        .step(Screen::CategoryList(UnitKind::Events))
        .expect("step");
    assert_eq!(step, Step::Goto(Screen::MainMenu));
}

#[test]
fn empty_root_returns_to_main_menu() {
    let fixture = Fixture::new();
    fs::create_dir_all(&fixture.roots.events).expect("events dir");
    let mut nav = fixture.navigator(NO_ANSWERS);
    let step = nav
        .step(Screen::CategoryList(UnitKind::Events))
        .expect("step");
    assert_eq!(step, Step::Goto(Screen::MainMenu));
}

#[test]
fn category_list_shows_counts_and_back() {
    let fixture = Fixture::new();
    let mut nav = fixture.navigator([Answer::Select(2)]);
    let step = nav
        .step(Screen::CategoryList(UnitKind::Commands))
        .expect("step");
    assert_eq!(step, Step::Goto(Screen::MainMenu));

    let (prompter, _) = nav.into_parts();
    let (_, items) = &prompter.shown[0];
    assert_eq!(items.len(), 3);
    assert!(items.contains(&"📁 util (1 files)".to_string()));
    assert!(items.contains(&"📁 mod (1 files)".to_string()));
    assert_eq!(items[2], BACK_TO_MAIN);
}

#[test]
fn picking_category_and_unit_reaches_actions() {
    let fixture = Fixture::new();

    // Learn where "util" lands; walk order is not sorted.
    let mut probe = fixture.navigator([Answer::Select(2)]);
    probe
        .step(Screen::CategoryList(UnitKind::Commands))
        .expect("probe");
    let util = category_index(&probe.into_parts().0, "util");

    let mut nav = fixture.navigator([Answer::Select(util), Answer::Select(0)]);
    let step = nav
        .step(Screen::CategoryList(UnitKind::Commands))
        .expect("category");
    let Step::Goto(screen) = step else {
        panic!("expected transition");
    };
    assert_eq!(
        screen,
        Screen::UnitList {
            kind: UnitKind::Commands,
            category: "util".to_string(),
        }
    );

    let step = nav.step(screen).expect("unit list");
    assert_eq!(
        step,
        Step::Goto(actions_for(UnitKind::Commands, "util", fixture.ping()))
    );
}

#[test]
fn unit_list_marks_paused_units_and_back_goes_to_categories() {
    let fixture = Fixture::new();
    let mut nav = fixture.navigator([Answer::Select(1)]);
    let step = nav
        .step(Screen::UnitList {
            kind: UnitKind::Commands,
            category: "mod".to_string(),
        })
        .expect("step");
    assert_eq!(step, Step::Goto(Screen::CategoryList(UnitKind::Commands)));

    let (prompter, _) = nav.into_parts();
    let (prompt, items) = &prompter.shown[0];
    assert_eq!(prompt, "Select a command:");
    assert_eq!(items, &vec!["📄 ban (paused)".to_string(), BACK.to_string()]);
}

#[test]
fn vanished_category_falls_back_to_category_list() {
    let fixture = Fixture::new();
    let mut nav = fixture.navigator(NO_ANSWERS);
    let step = nav
        .step(Screen::UnitList {
            kind: UnitKind::Commands,
            category: "gone".to_string(),
        })
        .expect("step");
    assert_eq!(step, Step::Goto(Screen::CategoryList(UnitKind::Commands)));
}

#[test]
fn pause_and_resume_stay_on_actions() {
    let fixture = Fixture::new();
    let screen = actions_for(UnitKind::Commands, "util", fixture.ping());
    let mut nav = fixture.navigator([Answer::Select(1), Answer::Select(2)]);

    let step = nav.step(screen.clone()).expect("pause");
    assert_eq!(step, Step::Goto(screen.clone()));
    let text = fs::read_to_string(fixture.ping()).expect("read");
    assert_eq!(disco_units::read_marker(&text), EnabledMarker::Disabled);

    let step = nav.step(screen.clone()).expect("resume");
    assert_eq!(step, Step::Goto(screen));
    let text = fs::read_to_string(fixture.ping()).expect("read");
    assert_eq!(disco_units::read_marker(&text), EnabledMarker::Enabled);
}

#[test]
fn edit_launches_editor_and_stays() {
    let fixture = Fixture::new();
    let screen = actions_for(UnitKind::Commands, "mod", fixture.ban());
    let mut nav = fixture.navigator([Answer::Select(0)]);

    let step = nav.step(screen.clone()).expect("edit");
    assert_eq!(step, Step::Goto(screen));

    let (_, editor) = nav.into_parts();
    assert_eq!(editor.opened, vec![fixture.ban()]);
}

#[test]
fn editor_failure_is_not_fatal() {
    let fixture = Fixture::new();
    let screen = actions_for(UnitKind::Commands, "mod", fixture.ban());
    let mut nav = Navigator::new(
        fixture.roots.clone(),
        ScriptedPrompter::new([Answer::Select(0)]),
        FakeEditor {
            fail: true,
            ..Default::default()
        },
    );

    let step = nav.step(screen.clone()).expect("edit");
    assert_eq!(step, Step::Goto(screen));
}

#[test]
fn declined_delete_keeps_file() {
    let fixture = Fixture::new();
    let screen = actions_for(UnitKind::Commands, "mod", fixture.ban());
    let mut nav = fixture.navigator([Answer::Select(3), Answer::Confirm(false)]);

    let step = nav.step(screen.clone()).expect("delete");
    assert_eq!(step, Step::Goto(screen));
    assert!(fixture.ban().exists());

    let (prompter, _) = nav.into_parts();
    assert!(prompter.shown[1].0.contains("ban.js"));
}

#[test]
fn confirmed_delete_removes_file_and_relisting_omits_it() {
    let fixture = Fixture::new();
    let mut nav = fixture.navigator([
        Answer::Select(3),
        Answer::Confirm(true),
        Answer::Select(0),
    ]);

    let step = nav
        .step(actions_for(UnitKind::Commands, "util", fixture.ping()))
        .expect("delete");
    assert_eq!(
        step,
        Step::Goto(Screen::UnitList {
            kind: UnitKind::Commands,
            category: "util".to_string(),
        })
    );
    assert!(!fixture.ping().exists());

    // The category is now empty, so the listing falls back further.
    let Step::Goto(screen) = step else {
        panic!("expected transition");
    };
    let step = nav.step(screen).expect("relist");
    assert_eq!(step, Step::Goto(Screen::CategoryList(UnitKind::Commands)));

    // Only "mod" remains; pick it and see the remaining unit.
    let step = nav
        .step(Screen::CategoryList(UnitKind::Commands))
        .expect("categories");
    assert_eq!(
        step,
        Step::Goto(Screen::UnitList {
            kind: UnitKind::Commands,
            category: "mod".to_string(),
        })
    );

    let (prompter, _) = nav.into_parts();
    let (_, items) = prompter.shown.last().expect("category prompt");
    assert_eq!(items, &vec!["📁 mod (1 files)".to_string(), BACK_TO_MAIN.to_string()]);
}

#[test]
fn actions_for_missing_unit_return_to_list() {
    let fixture = Fixture::new();
    fs::remove_file(fixture.ban()).expect("remove");
    let mut nav = fixture.navigator(NO_ANSWERS);
    let step = nav
        .step(actions_for(UnitKind::Commands, "mod", fixture.ban()))
        .expect("step");
    assert_eq!(
        step,
        Step::Goto(Screen::UnitList {
            kind: UnitKind::Commands,
            category: "mod".to_string(),
        })
    );
}

#[test]
fn full_session_pauses_a_unit_then_exits() {
    let fixture = Fixture::new();

    let mut probe = fixture.navigator([Answer::Select(2)]);
    probe
        .step(Screen::CategoryList(UnitKind::Commands))
        .expect("probe");
    let util = category_index(&probe.into_parts().0, "util");

    let mut nav = fixture.navigator([
        Answer::Select(0),    // Manage Commands
        Answer::Select(util), // util
        Answer::Select(0),    // ping
        Answer::Select(1),    // pause
        Answer::Select(4),    // back to unit list
        Answer::Select(1),    // back to categories
        Answer::Select(2),    // back to main menu
        Answer::Select(3),    // exit
    ]);
    assert_eq!(nav.run().expect("run"), Exit::Quit);

    let text = fs::read_to_string(fixture.ping()).expect("read");
    assert!(!disco_units::read_marker(&text).is_enabled());

    let (prompter, _) = nav.into_parts();
    let relisted = prompter
        .shown
        .iter()
        .rev()
        .find(|(prompt, _)| prompt == "Select a command:")
        .expect("unit list shown");
    assert_eq!(relisted.1[0], "📄 ping (paused)");
}

#[test]
fn prompt_failure_ends_session_with_error() {
    let fixture = Fixture::new();
    let mut nav = fixture.navigator(NO_ANSWERS);
    assert!(matches!(nav.run(), Err(PromptError::NoAnswer(_))));
}

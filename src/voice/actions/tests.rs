use std::cell::{Cell, RefCell};
use std::rc::Rc;

use super::*;

fn counter_registry(names: &[&str]) -> (CommandRegistry, Rc<RefCell<Vec<String>>>) {
    let calls = Rc::new(RefCell::new(Vec::new()));
    let mut registry = CommandRegistry::new();
    for name in names {
        let calls = Rc::clone(&calls);
        let tag = name.to_string();
        registry.register(*name, format!("{name} command"), move |_| {
            calls.borrow_mut().push(tag.clone());
        });
    }
    (registry, calls)
}

#[test]
fn test_lookup_is_case_insensitive() {
    let (registry, _) = counter_registry(&["time", "Open Notes"]);

    let a = registry.lookup("open notes").unwrap();
    let b = registry.lookup("OPEN NOTES").unwrap();
    let c = registry.lookup("oPeN nOtEs").unwrap();
    assert!(std::ptr::eq(a, b));
    assert!(std::ptr::eq(b, c));
    assert_eq!(a.name(), "Open Notes");
    assert_eq!(a.key(), "open notes");
    assert!(a.matches("Open NOTES"));

    assert!(registry.lookup("TIME").is_some());
    assert!(registry.lookup("date").is_none());
}

#[test]
fn test_list_preserves_registration_order() {
    let (registry, _) = counter_registry(&["time", "date", "weather", "help"]);
    let names: Vec<&str> = registry.iter().map(|c| c.name()).collect();
    assert_eq!(names, vec!["time", "date", "weather", "help"]);
    assert_eq!(registry.len(), 4);
}

#[test]
fn test_reregister_replaces_in_place() {
    let (mut registry, calls) = counter_registry(&["time", "date", "help"]);

    let replaced = Rc::new(Cell::new(0));
    let counter = Rc::clone(&replaced);
    registry.register("DATE", "Shows the date, loudly", move |_| {
        counter.set(counter.get() + 1);
    });

    assert_eq!(registry.len(), 3);
    let names: Vec<&str> = registry.list().iter().map(|c| c.name()).collect();
    assert_eq!(names, vec!["time", "DATE", "help"]);
    assert_eq!(
        registry.lookup("date").unwrap().description(),
        "Shows the date, loudly"
    );

    assert!(registry.execute("date", None));
    assert_eq!(replaced.get(), 1);
    assert!(calls.borrow().is_empty());
}

#[test]
fn test_execute_reports_existence() {
    let (registry, calls) = counter_registry(&["time"]);
    assert!(registry.execute("Time", None));
    assert!(!registry.execute("xyzzy", None));
    assert_eq!(*calls.borrow(), vec!["time".to_string()]);
}

#[test]
fn test_action_receives_params_and_registry() {
    let seen = Rc::new(RefCell::new(None));
    let sink = Rc::clone(&seen);
    let mut registry = CommandRegistry::new();
    registry.register("time", "Shows current time", |_| {});
    registry.register("search web", "Starts a web search", move |inv| {
        *sink.borrow_mut() = Some((inv.params().map(str::to_string), inv.registry.len()));
    });

    registry.execute("search web", Some("rust borrow checker"));
    assert_eq!(
        *seen.borrow(),
        Some((Some("rust borrow checker".to_string()), 2))
    );

    registry.execute("search web", Some("   "));
    assert_eq!(*seen.borrow(), Some((None, 2)));
}

#[test]
fn test_describe_lists_name_and_description() {
    let mut registry = CommandRegistry::new();
    registry.register("time", "Shows current time", |_| {});
    registry.register("help", "Shows all available commands", |_| {});
    assert_eq!(
        registry.describe(),
        "time - Shows current time\nhelp - Shows all available commands"
    );
}

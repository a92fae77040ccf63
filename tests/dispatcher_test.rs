//! End-to-end tests: engine events through gate, resolver and built-in commands

mod common;

use blade::config::Config;
use blade::voice::VoiceState;
use blade::HistoryKind;

use common::Harness;

#[test]
fn test_spoken_session_runs_commands() {
    let mut harness = Harness::new(&Config::default());
    harness.dispatcher.start();
    assert_eq!(harness.dispatcher.state(), VoiceState::Listening);

    harness.say("Blade weather");
    harness.say("what's for dinner");
    harness.say("blade open notes");

    assert_eq!(
        harness.messages(),
        vec![
            "Weather feature requires API configuration".to_string(),
            "Opening notes application".to_string(),
        ]
    );
    assert!(
        harness
            .history
            .borrow()
            .iter()
            .all(|e| e.kind == HistoryKind::Command)
    );

    harness.dispatcher.stop();
    harness.dispatcher.pump();
    assert_eq!(harness.dispatcher.state(), VoiceState::Idle);
}

#[test]
fn test_search_verbs_open_encoded_urls() {
    let mut harness = Harness::new(&Config::default());
    harness.dispatcher.start();

    harness.say("blade search rust & cats");
    harness.say("blade search images of red pandas");
    harness.say("blade search");

    assert_eq!(
        harness.opener.opened(),
        vec![
            "https://www.google.com/search?q=rust%20%26%20cats".to_string(),
            "https://www.google.com/search?q=red%20pandas&tbm=isch".to_string(),
            "https://www.google.com/search?q=".to_string(),
        ]
    );
    assert_eq!(
        harness.messages(),
        vec![
            "Searching for: rust & cats".to_string(),
            "Searching images of: red pandas".to_string(),
            "No search query provided".to_string(),
        ]
    );
}

#[test]
fn test_verbs_delegate_to_same_named_commands() {
    let mut harness = Harness::new(&Config::default());
    harness.dispatcher.start();

    harness.say("blade weather in paris");
    harness.say("blade help me");

    let messages = harness.messages();
    assert_eq!(messages[0], "Weather feature requires API configuration");
    assert!(messages[1].starts_with("Available commands:\ntime - Shows current time\n"));
    assert!(messages[1].ends_with("help - Shows all available commands"));
}

#[test]
fn test_configured_wake_word_and_search_templates() {
    let config: Config = toml::from_str(
        r#"
[voice]
wake_word = "  Computer "

[search]
web_url = "https://duckduckgo.com/?q={query}"
"#,
    )
    .unwrap();

    let mut harness = Harness::new(&config);
    harness.dispatcher.start();

    harness.say("blade search ignored");
    harness.say("COMPUTER search ferris");

    assert_eq!(
        harness.opener.opened(),
        vec!["https://duckduckgo.com/?q=ferris".to_string()]
    );
}

#[test]
fn test_configured_image_phrase_ignores_case() {
    let config: Config = toml::from_str("[search]\nimage_phrase = \"Images of \"\n").unwrap();
    let mut harness = Harness::new(&config);
    harness.dispatcher.start();

    harness.say("blade search images of cats");

    assert_eq!(
        harness.opener.opened(),
        vec!["https://www.google.com/search?q=cats&tbm=isch".to_string()]
    );
    assert_eq!(harness.messages(), vec!["Searching images of: cats".to_string()]);
}

#[test]
fn test_disabled_wake_word_from_config() {
    let config: Config = toml::from_str("[voice]\nwake_word_enabled = false\n").unwrap();
    let mut harness = Harness::new(&config);
    harness.dispatcher.start();

    harness.say("toggle");
    harness.say("blade toggle");

    // "blade toggle" is no longer stripped and matches nothing
    assert_eq!(harness.messages(), vec!["Toggling mode".to_string()]);
}

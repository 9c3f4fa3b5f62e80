use analysis::events::DemoEvent;
use analysis::sink::{DebugSink, DumpDirectory};
use analysis::source::{self, EventReader, ParseError};
use analysis::DemoSummary;
use pretty_assertions::assert_eq;

const STREAM: &str = r##"
{"kind":"player_info","name":"Alice","is_hltv":false,"user_id":3,"guid":"STEAM_1:0:11","is_bot":false}
{"kind":"player_info","name":"SourceTV","is_hltv":true,"user_id":1,"guid":"BOT","is_bot":true}
{"kind":"file_info","playback_time":1800.0,"match_id":42,"game_mode":1,"game_winner":3,"roster":[{"hero_name":"npc_dota_hero_lina","player_name":"Alice"},{"hero_name":"npc_dota_hero_pudge","player_name":"Bob"},{"hero_name":"npc_dota_hero_sven","player_name":"Carol"},{"hero_name":"npc_dota_hero_lion","player_name":"Dave"},{"hero_name":"npc_dota_hero_tiny","player_name":"Erin"},{"hero_name":"npc_dota_hero_axe","player_name":"Frank"},{"hero_name":"npc_dota_hero_zuus","player_name":"Grace"},{"hero_name":"npc_dota_hero_riki","player_name":"Heidi"},{"hero_name":"npc_dota_hero_viper","player_name":"Ivan"},{"hero_name":"npc_dota_hero_sniper","player_name":"Judy"}]}
{"kind":"combat_log_names","entries":[[1,"npc_dota_hero_lina"],[2,"npc_dota_hero_axe"],[3,"npc_dota_creep_badguys_melee_top"]]}
{"kind":"text_message","dest":3,"params":["#DOTA_Chat_Hello"]}
{"kind":"combat_log","name":"dota_combatlog","keys":{"type":4,"source_name":1,"target_name":2,"target_illusion":false,"timestamp":120.0}}
{"kind":"combat_log","name":"dota_combatlog","keys":{"type":4,"source_name":2,"target_name":3,"target_illusion":false,"timestamp":130.0}}
{"kind":"combat_log","name":"dota_combatlog","keys":{"type":4,"source_name":2,"target_name":9,"target_illusion":false,"timestamp":131.0}}
{"kind":"chat","message_type":5}
{"kind":"combat_log_names","entries":[[9,"npc_dota_creep_goodguys_ranged_bot"]]}
{"kind":"combat_log","name":"dota_combatlog","keys":{"type":4,"source_name":1,"target_name":9,"timestamp":140.0}}
{"kind":"overhead","message_type":0,"value":52}
"##;

#[test]
fn full_stream() {
    let mut summary = DemoSummary::new();
    let stats = source::run(EventReader::new(STREAM.as_bytes()), &mut summary, None).unwrap();

    assert_eq!(12, stats.events);
    assert_eq!(4, stats.combat_log_names);
    assert!(!stats.truncated);

    let result = summary.summary(3);
    assert_eq!(Some(42), result.match_id);
    assert_eq!(10, result.players.len());

    let alice = &result.players["Alice"];
    assert_eq!("npc_dota_hero_lina", alice.hero);
    assert_eq!(1, alice.kills);
    assert_eq!(Some(1), alice.creep_denies);
    assert_eq!(Some(0), alice.creep_kills);

    let frank = &result.players["Frank"];
    assert_eq!(1, frank.deaths);
    assert_eq!(Some(1), frank.creep_denies);

    // Target 9 was not known at 131.0 yet
    let axe = summary.hero("npc_dota_hero_axe").unwrap();
    assert_eq!(1, axe.creep_kill_types().len());

    assert_eq!(1, summary.player_info().len());
}

#[test]
fn frame_limit_truncates() {
    let mut summary = DemoSummary::new();
    let events = EventReader::new(STREAM.as_bytes()).with_frame_limit(Some(6));
    let stats = source::run(events, &mut summary, None).unwrap();

    assert_eq!(6, stats.events);
    assert!(stats.truncated);

    // The hero kill was the sixth event, the creep kills never arrived
    let lina = summary.hero("npc_dota_hero_lina").unwrap();
    assert_eq!(1, lina.kills().len());
    let axe = summary.hero("npc_dota_hero_axe").unwrap();
    assert!(axe.creep_kill_types().is_empty());
}

#[test]
fn frame_limit_larger_than_stream() {
    let mut summary = DemoSummary::new();
    let events = EventReader::new(STREAM.as_bytes()).with_frame_limit(Some(1000));
    let stats = source::run(events, &mut summary, None).unwrap();

    assert_eq!(12, stats.events);
    assert!(!stats.truncated);
}

#[test]
fn malformed_line_is_fatal() {
    let input = "{\"kind\":\"chat\",\"message_type\":5}\n\nnot json\n";

    let mut summary = DemoSummary::new();
    let err = source::run(EventReader::new(input.as_bytes()), &mut summary, None).unwrap_err();

    match err {
        ParseError::Decode { line, .. } => assert_eq!(3, line),
        other => panic!("Unexpected error: {:?}", other),
    };
}

#[test]
fn unknown_kind_is_fatal() {
    let input = "{\"kind\":\"entity_update\",\"id\":5}\n";

    let mut reader = EventReader::new(input.as_bytes());
    assert!(matches!(reader.next(), Some(Err(ParseError::Decode { line: 1, .. }))));
}

#[test]
fn sink_receives_unrouted_events() {
    let mut summary = DemoSummary::new();
    let mut dumped: Vec<DemoEvent> = Vec::new();

    source::run(
        EventReader::new(STREAM.as_bytes()),
        &mut summary,
        Some(&mut dumped as &mut dyn DebugSink),
    )
    .unwrap();

    assert_eq!(3, dumped.len());
    assert!(matches!(dumped[0], DemoEvent::TextMessage(_)));
    assert!(matches!(dumped[1], DemoEvent::Chat(_)));
    assert!(matches!(dumped[2], DemoEvent::Overhead(_)));
}

#[test]
fn dump_directory_numbers_files() {
    let dir = tempfile::tempdir().unwrap();
    let mut sink = DumpDirectory::create(dir.path().join("dumps"), "user_message").unwrap();

    let mut summary = DemoSummary::new();
    source::run(
        EventReader::new(STREAM.as_bytes()),
        &mut summary,
        Some(&mut sink as &mut dyn DebugSink),
    )
    .unwrap();

    assert_eq!(3, sink.dumped());
    for index in 1..=3 {
        let path = dir.path().join("dumps").join(format!("user_message_{}.dump", index));
        let content = std::fs::read_to_string(&path).unwrap();
        let _event: DemoEvent = serde_json::from_str(&content).unwrap();
    }
    assert!(!dir.path().join("dumps").join("user_message_4.dump").exists());
}

use analysis::render::{render, Indented};
use pretty_assertions::assert_eq;

#[test]
fn nested_mappings() {
    let value = serde_json::json!({
        "match_id": 42,
        "players": {
            "Alice": {
                "hero": "npc_dota_hero_lina",
                "kills": 3,
                "team": null
            }
        },
        "winner": "radiant"
    });

    let expected = "\
match_id: 42
players:
  Alice:
    hero: npc_dota_hero_lina
    kills: 3
    team: null
winner: radiant
";
    assert_eq!(expected, Indented(&value).to_string());
}

#[test]
fn lists_stay_inline() {
    let value = serde_json::json!({ "kill_list": [1, 2] });

    assert_eq!("kill_list: [1,2]\n", Indented(&value).to_string());
}

#[test]
fn summary() {
    let mut summary = analysis::DemoSummary::new();
    summary.parse_file_info(&analysis::events::FileInfo {
        playback_time: 60.0,
        match_id: 1,
        game_mode: 2,
        game_winner: 2,
        roster: vec![analysis::events::RosterEntry {
            hero_name: "npc_dota_hero_lina".to_owned(),
            player_name: "Alice".to_owned(),
        }],
    });

    let output = render(&summary.summary(3)).unwrap();

    assert!(output.starts_with("game_mode: 2\n"), "{}", output);
    assert!(output.contains("players:\n  Alice:\n    creep_denies: 0\n"), "{}", output);
    assert!(output.contains("    hero: npc_dota_hero_lina\n"), "{}", output);
    assert!(!output.contains("player_info"), "{}", output);
}

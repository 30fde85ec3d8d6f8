//! Detail-view projection tests.
//!
//! Legality rows and mana symbols as the detail screen consumes them,
//! driven through the public API only.

use cardscope::{
    decode_mana_cost, legality_rows, Card, Legalities, ManaSymbol, Treatment, FORMAT_COUNT,
};

/// The row count never varies with how sparse the source record is.
#[test]
fn test_projection_is_always_full_length() {
    assert_eq!(legality_rows(None).len(), FORMAT_COUNT);

    let sparse = Legalities {
        commander: Some("legal".to_string()),
        ..Legalities::default()
    };
    assert_eq!(legality_rows(Some(&sparse)).len(), FORMAT_COUNT);

    let card: Card = serde_json::from_str(
        r#"{"name": "Shock", "legalities": {"modern": "legal", "standard": "not_legal"}}"#,
    )
    .unwrap();
    assert_eq!(card.legality_rows().len(), FORMAT_COUNT);
}

#[test]
fn test_detail_screen_rows() {
    let card: Card = serde_json::from_str(
        r#"{
            "name": "Shock",
            "legalities": {
                "standard": "not_legal",
                "modern": "legal",
                "vintage": "restricted",
                "legacy": "banned"
            }
        }"#,
    )
    .unwrap();

    let rows = card.legality_rows();

    let modern = rows.iter().find(|row| row.label == "Modern").unwrap();
    assert_eq!(modern.status_display(), "LEGAL");
    assert_eq!(modern.treatment(), Treatment::Positive);

    let standard = rows.iter().find(|row| row.label == "Standard").unwrap();
    assert_eq!(standard.treatment(), Treatment::Muted);

    // banned/restricted render with no special indicator, same as absent.
    let vintage = rows.iter().find(|row| row.label == "Vintage").unwrap();
    assert_eq!(vintage.treatment(), Treatment::Plain);
    let legacy = rows.iter().find(|row| row.label == "Legacy").unwrap();
    assert_eq!(legacy.treatment(), Treatment::Plain);

    let pauper = rows.iter().find(|row| row.label == "Pauper").unwrap();
    assert_eq!(pauper.status, "");
    assert_eq!(pauper.treatment(), Treatment::Plain);
}

#[test]
fn test_mana_symbol_sequences() {
    let symbols = decode_mana_cost("{2}{W}{W}");
    assert_eq!(
        symbols.as_slice(),
        [ManaSymbol::Two, ManaSymbol::White, ManaSymbol::White]
    );

    // X costs are outside the icon set and silently dropped.
    let symbols = decode_mana_cost("{X}{B}");
    assert_eq!(symbols.as_slice(), [ManaSymbol::Black]);

    assert!(decode_mana_cost("").is_empty());
}

#[test]
fn test_mana_symbols_from_card_json() {
    let card: Card = serde_json::from_str(r#"{"name": "Opt", "mana_cost": "{U}"}"#).unwrap();
    assert_eq!(card.mana_symbols().as_slice(), [ManaSymbol::Blue]);

    let cardless: Card = serde_json::from_str(r#"{"name": "Vanilla"}"#).unwrap();
    assert!(cardless.mana_symbols().is_empty());
}

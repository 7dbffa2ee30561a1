use super::*;

#[test]
fn normalize_strips_punctuation_and_lowercases() {
    assert_eq!(normalize_outbound("Hola, Mundo!!"), "hola mundo");
}

#[test]
fn normalize_collapses_whitespace_runs() {
    assert_eq!(normalize_outbound("  que \t tal\n\n estas  "), "que tal estas");
}

#[test]
fn normalize_collapses_gap_left_by_stripped_symbols() {
    assert_eq!(normalize_outbound("a ! b"), "a b");
    assert_eq!(normalize_outbound("!!! hola"), "hola");
}

#[test]
fn normalize_keeps_digits_and_underscores() {
    assert_eq!(normalize_outbound("Pedido_42 #7"), "pedido_42 7");
}

#[test]
fn normalize_drops_non_ascii_letters() {
    assert_eq!(normalize_outbound("¿Cómo ESTÁS?"), "cmo ests");
    assert_eq!(normalize_outbound("buenos días"), "buenos das");
    assert_eq!(normalize_outbound("Año Ñandú"), "ao and");
}

#[test]
fn normalize_whitespace_follows_browser_class() {
    // BOM separates words, NEL is dropped like any other symbol.
    assert_eq!(normalize_outbound("hola\u{feff}mundo"), "hola mundo");
    assert_eq!(normalize_outbound("hola\u{0085}mundo"), "holamundo");
    assert_eq!(normalize_outbound("a\u{00a0}\u{3000}b"), "a b");
}

#[test]
fn normalize_may_produce_empty_payload() {
    assert_eq!(normalize_outbound("?!"), "");
    assert_eq!(normalize_outbound(""), "");
}

#[test]
fn normalize_is_idempotent() {
    let samples = [
        "Hola, Mundo!!",
        "hola mundo",
        "  ¿Qué   HORA es?? ",
        "tab\tseparated\u{00a0}text",
        "__under__ score",
        "Ñandú \u{feff} año",
        "",
    ];
    for sample in samples {
        let once = normalize_outbound(sample);
        assert_eq!(normalize_outbound(&once), once, "sample: {sample:?}");
    }
}

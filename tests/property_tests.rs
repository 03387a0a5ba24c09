use manaforge::config::ManaFormula;
use manaforge::valuation::{ManaValuator, PtValuator};
use manaforge::{CardRecord, CardValuator};
use proptest::prelude::*;

// --- STRATEGIES ---

// Mana costs built from real and junk symbols
fn arb_symbol() -> impl Strategy<Value = String> {
    prop_oneof![
        (0u32..20).prop_map(|n| format!("{{{}}}", n)),
        prop::sample::select(vec!["W", "U", "B", "R", "G", "C", "X", "W/U", "2/G", "W/P", ""])
            .prop_map(|s| format!("{{{}}}", s)),
        "[^{}]{0,3}",
    ]
}

prop_compose! {
    fn arb_mana_cost()(symbols in prop::collection::vec(arb_symbol(), 0..10)) -> String {
        symbols.concat()
    }
}

// Rules text mixing scoring phrases with noise
fn arb_fragment() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::sample::select(vec![
            "Flying",
            "lifelink",
            "Whenever this creature attacks, ",
            "when it enters, ",
            "draw a card.",
            "{T}: Add {G}.",
            "{2}, {T}: ",
            "Sacrifice a creature: ",
            "Defender",
            "can't block.",
            "Полет",
            "не может атаковать",
            "\n",
        ])
        .prop_map(String::from),
        ".{0,12}",
    ]
}

prop_compose! {
    fn arb_rules_text()(parts in prop::collection::vec(arb_fragment(), 0..12)) -> String {
        parts.concat()
    }
}

prop_compose! {
    fn arb_card()(
        name in ".{0,10}",
        mana in arb_mana_cost(),
        text in arb_rules_text(),
        pt in prop_oneof![
            (0u32..20, 0u32..20).prop_map(|(p, t)| format!("{}/{}", p, t)),
            ".{0,6}",
        ],
    ) -> CardRecord {
        CardRecord::new(name, mana, text, pt, "")
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    #[test]
    fn test_ability_total_is_clamped_raw(text in arb_rules_text()) {
        let v = CardValuator::with_defaults().unwrap();
        let d = v.ability.breakdown(&text);
        prop_assert_eq!(d.total, d.raw_total.max(0) as u64);
        prop_assert_eq!(
            d.raw_total,
            d.keywords + d.triggers + d.effects + d.activated + d.synergy + d.drawbacks
        );
        prop_assert!(d.drawbacks <= 0);
    }

    #[test]
    fn test_card_invariants(card in arb_card()) {
        let v = CardValuator::with_defaults().unwrap();
        let s = v.evaluate(&card);
        prop_assert_eq!(s.total_power, s.mana_points + s.pt_points);
        prop_assert_eq!(s.balance, s.pt_points as i64);
        prop_assert_eq!(&s, &v.evaluate(&card));
        prop_assert_eq!(s.card, card);
    }

    #[test]
    fn test_mana_matches_breakdown(cost in arb_mana_cost()) {
        let m = ManaValuator::new(&ManaFormula::default()).unwrap();
        let b = m.analyze(&cost);
        prop_assert_eq!(m.value(&cost), b.total);
        prop_assert_eq!(b.total, b.generic_points + b.colored_points);
    }

    #[test]
    fn test_mana_is_monotonic_in_generic(n in 0u64..500) {
        let m = ManaValuator::new(&ManaFormula::default()).unwrap();
        prop_assert!(m.generic_points(n + 1) > m.generic_points(n));
        prop_assert!(m.colored_points(n + 1) > m.colored_points(n));
    }

    #[test]
    fn test_pt_is_multiplier_times_sum(p in 0u64..1000, t in 0u64..1000) {
        let pt = PtValuator::new(2);
        prop_assert_eq!(pt.value(&format!("{}/{}", p, t)), 2 * (p + t));
    }

    #[test]
    fn test_arbitrary_strings_never_panic(mana in ".*", text in ".*", pt in ".*") {
        let v = CardValuator::with_defaults().unwrap();
        let _ = v.evaluate(&CardRecord::new("x", mana, text, pt, ""));
    }
}

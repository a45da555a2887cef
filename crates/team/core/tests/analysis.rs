use team_core::{
    Build, BuildError, Character, ConditionGroup, ConditionLogic, Equipment, ParseContext,
    SelectionKey, SelectionStore, StatKind, StatSheet, analyze, filter, parse_effect,
};

const EPSILON: f64 = 1e-6;

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < EPSILON,
        "expected {expected}, got {actual}"
    );
}

fn assert_sheets_close(a: &StatSheet, b: &StatSheet) {
    for ((stat, left), (_, right)) in a.iter().zip(b.iter()) {
        assert!(
            (left.value - right.value).abs() < EPSILON,
            "{stat}: {} vs {}",
            left.value,
            right.value
        );
        assert_eq!(left.conditional, right.conditional, "{stat} conditional flag");
    }
}

fn catalog_items() -> [Equipment; 3] {
    [
        Equipment::new("Saiyan Armor")
            .with_id("101")
            .with_effect("Base Strike & Blast Attack+10.00%")
            .with_effect("8.00 ~ 12.50% to Strike & Blast Defense per 'Tag: Son Family' battle member."),
        Equipment::new("Potara Earring")
            .with_id("102")
            .with_effect("10.00% to Blast Attack when 'Tag: Potara' is a battle member")
            .with_effect("Critical+3.30%")
            .with_effect("Strike Attack+8.00% - OR - Blast Attack+8.00%"),
        Equipment::new("Scouter")
            .with_id("103")
            .with_effect("Base Strike Attack+4.10% Strike Attack+2.20%")
            .with_effect("Reduces Ki cost of Rising Rush by 10 counts."),
    ]
}

fn build_from(order: [usize; 3], multipliers: [u8; 3]) -> Build {
    let items = catalog_items();
    let mut build = Build::new();
    for index in order {
        let slot = build.equip(&items[index]).unwrap();
        for _ in 0..multipliers[index] {
            build.toggle_multiplier(slot);
        }
    }
    build
}

#[test]
fn aggregation_is_independent_of_equip_order() {
    let multipliers = [2, 1, 0];
    let orders = [
        [0, 1, 2],
        [0, 2, 1],
        [1, 0, 2],
        [1, 2, 0],
        [2, 0, 1],
        [2, 1, 0],
    ];
    let goku = Character::new("Goku").with_tags(["Saiyan", "Son Family"]);

    let reference = analyze(&build_from(orders[0], multipliers), &SelectionStore::new(), Some(&goku));
    for order in &orders[1..] {
        let analysis = analyze(&build_from(*order, multipliers), &SelectionStore::new(), Some(&goku));
        assert_sheets_close(&analysis.sheet, &reference.sheet);
        assert_eq!(analysis.other_effects, reference.other_effects);
    }

    let sheet = &reference.sheet;
    assert_close(sheet.value(StatKind::BaseStrikeAttack), 14.1);
    assert_close(sheet.value(StatKind::BaseBlastAttack), 10.0);
    assert_close(sheet.value(StatKind::StrikeDefense), 25.0);
    assert_close(sheet.value(StatKind::BlastDefense), 25.0);
    assert_close(sheet.value(StatKind::BlastAttack), 10.0);
    assert_close(sheet.value(StatKind::StrikeAttack), 10.2);
    assert_close(sheet.value(StatKind::Critical), 3.3);
    assert!(sheet.is_conditional(StatKind::StrikeAttack));
    assert!(!sheet.is_conditional(StatKind::BlastAttack));
    assert_eq!(
        reference.other_effects,
        vec!["Reduces Ki cost of Rising Rush by 10 counts.".to_owned()]
    );
}

#[test]
fn base_compound_parses_to_both_base_stats() {
    let line = parse_effect("Base Strike & Blast Attack+10.00%", 0, &ParseContext::default());
    let mut sheet = StatSheet::new();
    for c in &line.contributions {
        sheet.add(c.stat, c.delta);
    }
    assert_close(sheet.value(StatKind::BaseStrikeAttack), 10.0);
    assert_close(sheet.value(StatKind::BaseBlastAttack), 10.0);
    assert_eq!(sheet.touched().count(), 2);
    assert_eq!(line.residual, None);
}

#[test]
fn base_and_plain_stats_never_cross() {
    let plain = parse_effect("Strike Attack+8.00%", 0, &ParseContext::default());
    assert!(plain.touched().all(|s| s != StatKind::BaseStrikeAttack));

    let base = parse_effect("Base Strike Attack+8.00%", 0, &ParseContext::default());
    assert!(base.touched().all(|s| s != StatKind::StrikeAttack));
}

#[test]
fn or_branch_toggle_moves_conditional_bonus() {
    let choice = Equipment::new("Choice")
        .with_id("7")
        .with_effect("5.00% to Blast Defense - OR - 5.00% to Strike Defense");
    let mut build = Build::new();
    build.equip(&choice).unwrap();
    let instance = build.slot(0).unwrap().id;
    let mut selections = SelectionStore::new();

    let first = analyze(&build, &selections, None);
    assert_close(first.sheet.value(StatKind::BlastDefense), 5.0);
    assert!(first.sheet.is_conditional(StatKind::BlastDefense));
    assert_eq!(first.selectors.len(), 1);
    assert_eq!(first.selectors[0].selected, 0);
    assert_eq!(
        first.selectors[0].options,
        vec!["5.00% to Blast Defense", "5.00% to Strike Defense"]
    );

    assert!(selections.toggle(SelectionKey::new(instance, 0), &choice.slots[0].effect));
    let second = analyze(&build, &selections, None);
    assert_close(second.sheet.value(StatKind::StrikeDefense), 5.0);
    assert!(second.sheet.is_conditional(StatKind::StrikeDefense));
    assert_close(second.sheet.value(StatKind::BlastDefense), 0.0);
    assert_eq!(second.selectors[0].selected, 1);
}

#[test]
fn per_member_bonus_scales_with_multiplier() {
    let text = "6.00% to Strike Attack per 'Tag: Saiyan' battle member";
    let three = parse_effect(text, 0, &ParseContext::default().with_multiplier(3));
    let total: f64 = three
        .contributions
        .iter()
        .filter(|c| c.stat == StatKind::StrikeAttack)
        .map(|c| c.delta)
        .sum();
    assert_close(total, 18.0);

    let zero = parse_effect(text, 0, &ParseContext::default());
    assert!(zero.contributions.iter().all(|c| c.delta == 0.0));
    assert_eq!(zero.residual, None);
}

#[test]
fn threshold_bonus_is_binary() {
    let item = Equipment::new("Potara")
        .with_id("5")
        .with_effect("10.00% to Blast Attack when 'Tag: Potara' is a battle member");
    let mut build = Build::new();
    build.equip(&item).unwrap();
    let selections = SelectionStore::new();

    assert_close(analyze(&build, &selections, None).sheet.value(StatKind::BlastAttack), 0.0);
    for _ in 1..=3 {
        build.toggle_multiplier(0);
        assert_close(analyze(&build, &selections, None).sheet.value(StatKind::BlastAttack), 10.0);
    }
    build.toggle_multiplier(0);
    assert_close(analyze(&build, &selections, None).sheet.value(StatKind::BlastAttack), 0.0);
}

#[test]
fn duplicate_equip_leaves_build_unchanged() {
    let [armor, earring, scouter] = catalog_items();
    let mut build = Build::new();
    build.equip(&armor).unwrap();
    build.equip(&earring).unwrap();

    let before = build.clone();
    let duplicate = Equipment::new("Saiyan Armor (copy)").with_id("101");
    assert!(matches!(
        build.equip(&duplicate),
        Err(BuildError::DuplicateEquip { slot: 0, .. })
    ));
    assert_eq!(build, before);
    assert_eq!(build.slots().len(), 3);
    assert_eq!(build.len(), 2);

    build.equip(&scouter).unwrap();
    assert!(matches!(
        build.equip(&Equipment::new("Extra").with_id("999")),
        Err(BuildError::SlotsFull { capacity: 3 })
    ));
}

#[test]
fn condition_logic_decides_applicability() {
    let groups = vec![
        ConditionGroup::new(["Saiyan"]),
        ConditionGroup::new(["Frieza Force"]),
    ];
    let frieza = Character::new("Frieza").with_tags(["Frieza Force"]);

    let any = Equipment::new("Either").with_conditions(groups.clone(), ConditionLogic::Or);
    let all = Equipment::new("Both").with_conditions(groups, ConditionLogic::And);
    assert!(filter::is_applicable(&any, &frieza));
    assert!(!filter::is_applicable(&all, &frieza));
}

#[test]
fn repeated_analysis_is_bit_identical() {
    let build = build_from([0, 1, 2], [3, 1, 0]);
    let selections = SelectionStore::new();
    let first = analyze(&build, &selections, None);
    let second = analyze(&build, &selections, None);

    for ((_, a), (_, b)) in first.sheet.iter().zip(second.sheet.iter()) {
        assert_eq!(a.value.to_bits(), b.value.to_bits());
        assert_eq!(a.conditional, b.conditional);
    }
    assert_eq!(first, second);
}

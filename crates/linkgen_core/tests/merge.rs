use linkgen_core::{CategoryKind, ParameterCategory, ParametersModel, SelectionEntry};

fn category(entries: &[(&str, &str, bool)]) -> ParameterCategory {
    entries
        .iter()
        .map(|(id, name, selected)| {
            let entry = SelectionEntry::new(*id, *name);
            if *selected {
                entry.selected()
            } else {
                entry
            }
        })
        .collect()
}

#[test]
fn merge_keeps_local_selection_for_surviving_ids() {
    let local = category(&[("1", "Revolut", true), ("2", "Wise", false)]);
    let remote = category(&[("1", "Revolut", false), ("2", "Wise", false)]);

    let merged = local.merged(&remote);

    assert!(merged.get("1").unwrap().is_selected);
    assert!(!merged.get("2").unwrap().is_selected);
}

#[test]
fn merge_takes_remote_name_for_relabelled_entries() {
    let local = category(&[("7", "Old Name", true)]);
    let remote = category(&[("7", "New Name", false)]);

    let merged = local.merged(&remote);
    let entry = merged.get("7").unwrap();

    assert_eq!(entry.name, "New Name");
    assert!(entry.is_selected);
}

#[test]
fn merge_adds_new_remote_entries_unselected() {
    let local = category(&[("1", "Revolut", true)]);
    let remote = category(&[("1", "Revolut", false), ("2", "Wise", false)]);

    let merged = local.merged(&remote);

    assert_eq!(merged.len(), 2);
    assert!(!merged.get("2").unwrap().is_selected);
}

#[test]
fn merge_drops_entries_removed_from_catalogue() {
    let local = category(&[("1", "Revolut", true), ("2", "Wise", true)]);
    let remote = category(&[("2", "Wise", false)]);

    let merged = local.merged(&remote);

    assert_eq!(merged.len(), 1);
    assert!(merged.get("1").is_none());
    assert!(merged.get("2").unwrap().is_selected);
}

#[test]
fn merge_with_empty_remote_clears_category() {
    let local = category(&[("1", "Revolut", true)]);
    let remote = ParameterCategory::new();

    assert!(local.merged(&remote).is_empty());
}

#[test]
fn merge_with_empty_local_matches_remote_unselected() {
    let local = ParameterCategory::new();
    let remote = category(&[("1", "Revolut", false), ("2", "Wise", false)]);

    let merged = local.merged(&remote);

    assert_eq!(merged, remote);
    assert!(merged.entries().all(|entry| !entry.is_selected));
}

#[test]
fn merge_is_idempotent() {
    let local = category(&[
        ("1", "Revolut", true),
        ("2", "Wise", false),
        ("3", "Gone", true),
    ]);
    let remote = category(&[
        ("1", "Revolut Ltd", false),
        ("2", "Wise", false),
        ("4", "Monzo", false),
    ]);

    let once = local.merged(&remote);
    let twice = once.merged(&remote);

    assert_eq!(once, twice);
}

#[test]
fn categories_merge_independently() {
    let mut local = ParametersModel::default();
    local.companies.insert(SelectionEntry::new("1", "Wise").selected());
    local.titles.insert(SelectionEntry::new("1", "Engineer"));

    let mut remote = ParametersModel::default();
    remote.companies.insert(SelectionEntry::new("1", "Wise"));
    remote.titles.insert(SelectionEntry::new("1", "Engineer"));
    remote.countries.insert(SelectionEntry::new("1", "Ireland"));

    let merged = local.merged(&remote);

    // Same id in different categories must not leak selection across them.
    assert!(merged.companies.get("1").unwrap().is_selected);
    assert!(!merged.titles.get("1").unwrap().is_selected);
    assert!(!merged.countries.get("1").unwrap().is_selected);
    assert!(merged.cities.is_empty());
}

#[test]
fn model_merge_covers_all_category_kinds() {
    let mut remote = ParametersModel::default();
    for kind in CategoryKind::ALL {
        remote
            .category_mut(kind)
            .insert(SelectionEntry::new("9", "Entry"));
    }

    let merged = ParametersModel::default().merged(&remote);

    for kind in CategoryKind::ALL {
        assert_eq!(merged.category(kind).len(), 1, "{}", kind.label());
    }
}

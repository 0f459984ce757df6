use super::*;

use DecorationId::*;

#[test]
fn add_past_cap_is_ignored() {
    let mut s = SelectionSet::new();
    for id in [Pepperoni, Mushroom, Olive, Onion] {
        assert!(s.add(id));
    }
    assert!(!s.add(Basil));
    assert_eq!(s.len(), MAX_SELECTION);
    assert!(!s.contains(Basil));
}

#[test]
fn toggle_removes_present_id_even_when_full() {
    let mut s = SelectionSet::from_ids([Pepperoni, Mushroom, Olive, Onion]);
    assert!(!s.toggle(Olive));
    assert_eq!(s.as_slice(), &[Pepperoni, Mushroom, Onion]);
    assert!(s.toggle(Basil));
    assert_eq!(s.as_slice(), &[Pepperoni, Mushroom, Onion, Basil]);
}

#[test]
fn cap_holds_for_any_toggle_sequence() {
    let mut s = SelectionSet::new();
    let ids = DecorationId::ALL;
    let mut state = 17u64;
    for _ in 0..500 {
        state = state.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1);
        let id = ids[(state >> 33) as usize % ids.len()];
        let was_present = s.contains(id);
        s.toggle(id);
        assert!(s.len() <= MAX_SELECTION);
        if was_present {
            assert!(!s.contains(id));
        }
    }
}

#[test]
fn from_ids_drops_duplicates_and_overflow() {
    let s = SelectionSet::from_ids([Ham, Ham, Olive, Basil, Tomato, Onion, Pesto]);
    assert_eq!(s.as_slice(), &[Ham, Olive, Basil, Tomato]);
}

#[test]
fn point_and_zone_views_keep_order() {
    let s = SelectionSet::from_ids([HotHoney, Pepperoni, Pesto, Olive]);
    let points: Vec<_> = s.point_decorations().map(|d| d.id).collect();
    let zones: Vec<_> = s.zone_decorations().map(|d| d.id).collect();
    assert_eq!(points, vec![Pepperoni, Olive]);
    assert_eq!(zones, vec![HotHoney, Pesto]);
}

#[test]
fn wedge_lookup_follows_topology() {
    let mut st = SelectionState::default();
    st.toggle(SelectionTarget::Whole, Pepperoni);
    st.toggle(SelectionTarget::Left, Olive);
    st.toggle(SelectionTarget::Right, Mushroom);

    for k in 0..8 {
        assert!(st.set_for_wedge(k).contains(Pepperoni));
    }

    st.topology = Topology::Half;
    for k in [2, 3, 4, 5] {
        assert_eq!(st.set_for_wedge(k).as_slice(), &[Olive]);
    }
    for k in [0, 1, 6, 7] {
        assert_eq!(st.set_for_wedge(k).as_slice(), &[Mushroom]);
    }
    assert!(st.set(SelectionTarget::Whole).contains(Pepperoni));
}

#[test]
fn topology_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&Topology::Half).unwrap(), "\"half\"");
    let t: Topology = serde_json::from_str("\"whole\"").unwrap();
    assert_eq!(t, Topology::Whole);
}

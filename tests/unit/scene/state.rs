use super::*;
use crate::decor::registry::DecorationId;
use crate::scene::creation::CreationId;
use crate::scene::selection::{SelectionTarget, Topology};

#[test]
fn half_topology_survives_a_round_trip() {
    let mut scene = Scene::default();
    scene.selection.topology = Topology::Half;
    scene.selection.toggle(SelectionTarget::Left, DecorationId::Pepperoni);
    scene.selection.toggle(SelectionTarget::Left, DecorationId::Pesto);
    scene.selection.toggle(SelectionTarget::Right, DecorationId::Mushroom);
    scene.selection.toggle(SelectionTarget::Whole, DecorationId::Olive);
    scene.animation = AnimationMode::Flip;
    scene.filter = FilterMode::Mono;

    let saved = SavedCreation {
        id: CreationId(3),
        draft: scene.to_draft("Half and half"),
        created_at: 42,
    };
    let json = saved.to_json().unwrap();
    let loaded = SavedCreation::from_json(&json).unwrap();
    assert_eq!(Scene::from_creation(&loaded).unwrap(), scene);
}

#[test]
fn empty_modes_map_to_null() {
    let draft = Scene::default().to_draft("Plain");
    assert_eq!(draft.animation, None);
    assert_eq!(draft.filter, None);
    assert_eq!(Scene::from_draft(&draft).unwrap(), Scene::default());
}

#[test]
fn invalid_draft_does_not_load() {
    let mut draft = Scene::default().to_draft("");
    assert!(Scene::from_draft(&draft).is_err());
    draft.name = "ok".into();
    draft.toppings = vec![DecorationId::Ham; 2];
    assert!(Scene::from_draft(&draft).is_err());
}

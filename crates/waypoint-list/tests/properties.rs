//! Paging and edit-session properties over arbitrary list sizes

use proptest::prelude::*;
use waypoint_list::{
    ListConfig, ListPresenter, LoadMoreTrigger, MemorySurface, NodeId, PointSource, PointsModel, SessionId,
    SyntheticEvent, SyntheticKey,
};

fn presenter(initial_count: usize, step: usize) -> ListPresenter<MemorySurface> {
    let mut surface = MemorySurface::new();
    let container = surface.create_container("section");
    let config = ListConfig {
        initial_count,
        step,
        ..ListConfig::default()
    };
    ListPresenter::new(surface, container, config).unwrap()
}

fn list_children(presenter: &ListPresenter<MemorySurface>) -> Vec<NodeId> {
    presenter
        .list()
        .map(|list| presenter.surface().children(*list).unwrap().to_vec())
        .unwrap_or_default()
}

/// Rendered nodes line up with sessions, and sessions with the snapshot prefix
fn assert_in_order(presenter: &ListPresenter<MemorySurface>, model: &PointsModel) {
    let points = model.points();
    let children = list_children(presenter);
    assert_eq!(children.len(), presenter.sessions().len());
    for (i, (node, session)) in children.iter().zip(presenter.sessions()).enumerate() {
        assert_eq!(session.mounted_node(), Some(node));
        assert_eq!(session.point_id(), points[i].id);
    }
}

proptest! {
    #[test]
    fn prop_first_page(total in 1usize..30, initial in 0usize..12) {
        let model = PointsModel::with_mock(total);
        let mut p = presenter(initial, 1);
        p.init(&model).unwrap();

        prop_assert_eq!(list_children(&p).len(), total.min(initial));
        assert_in_order(&p, &model);
    }

    #[test]
    fn prop_load_more_exhausts(total in 0usize..30, initial in 0usize..10, step in 1usize..5) {
        let model = PointsModel::with_mock(total);
        let mut p = presenter(initial, step);
        p.init(&model).unwrap();
        let trigger = LoadMoreTrigger::new();

        let remaining = total.saturating_sub(initial);
        let activations = remaining.div_ceil(step);
        for k in 1..=activations {
            let mut click = SyntheticEvent::new();
            trigger.activate(&mut p, &mut click).unwrap();
            prop_assert_eq!(list_children(&p).len(), total.min(initial + k * step));
            assert_in_order(&p, &model);
        }
        prop_assert_eq!(list_children(&p).len(), total);

        for _ in 0..3 {
            let mut click = SyntheticEvent::new();
            prop_assert_eq!(trigger.activate(&mut p, &mut click).unwrap(), 0);
        }
        prop_assert_eq!(list_children(&p).len(), total);
        prop_assert_eq!(p.page().rendered_count, total);
    }

    #[test]
    fn prop_non_escape_keys_keep_editing(total in 1usize..10, key in "[a-zA-Z]{1,10}") {
        prop_assume!(key != "Escape");
        let model = PointsModel::with_mock(total);
        let mut p = presenter(total, 1);
        p.init(&model).unwrap();

        let id = SessionId::new(total - 1);
        p.rollup(id).unwrap();
        let mut press = SyntheticKey::new(key);
        prop_assert_eq!(p.key_down(&mut press).unwrap(), 0);
        prop_assert!(p.listeners().has_cancel_listener(id));
        prop_assert_eq!(p.editing_sessions(), vec![id]);
    }

    #[test]
    fn prop_cancel_listener_tracks_state(ops in proptest::collection::vec((0usize..4, 0usize..3), 0..40)) {
        let model = PointsModel::with_mock(4);
        let mut p = presenter(4, 1);
        p.init(&model).unwrap();

        for (index, op) in ops {
            let id = SessionId::new(index);
            match op {
                0 => { p.rollup(id).unwrap(); }
                1 => { p.submit(id, &mut SyntheticEvent::new()).unwrap(); }
                _ => { p.key_down(&mut SyntheticKey::escape()).unwrap(); }
            }
            for session in p.sessions() {
                prop_assert_eq!(session.is_editing(), p.listeners().has_cancel_listener(session.id()));
            }
            assert_in_order(&p, &model);
        }
    }
}

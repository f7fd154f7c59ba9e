//! Unit tests for tr-map.
//!
//! Every scenario finishes with a topology check: links must stay
//! bidirectional whatever the editing sequence.

#[cfg(test)]
mod helpers {
    use tr_core::{TileId, TilePos};
    use crate::{MapElement, TrackMap};

    pub fn p(x: u32, y: u32) -> TilePos {
        TilePos::new(x, y)
    }

    pub fn map() -> TrackMap {
        TrackMap::new(10, 10, 50)
    }

    pub fn id(map: &TrackMap, x: u32, y: u32) -> TileId {
        map.tile_id(p(x, y)).unwrap()
    }

    pub fn el(map: &TrackMap, x: u32, y: u32) -> &MapElement {
        map.at(p(x, y)).unwrap()
    }

    pub fn assert_sound(map: &TrackMap) {
        let issues = map.check_topology();
        assert!(issues.is_empty(), "topology issues: {issues:?}");
    }

    /// `(2,3) -> (3,3) -> (4,3)`, laid left to right by clicks.
    pub fn row_of_three() -> TrackMap {
        let mut m = map();
        m.add_track(p(2, 3)).unwrap();
        m.add_track(p(3, 3)).unwrap();
        m.add_track(p(4, 3)).unwrap();
        m
    }
}

// ── Grid ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod grid {
    use tr_core::{Direction, Point, TileId};
    use super::helpers::{map, p};
    use crate::{ElementKind, Grid};

    #[test]
    fn flat_ids_are_row_major() {
        let g = Grid::new(10, 8, 50);
        assert_eq!(g.id(p(3, 2)), Some(TileId(23)));
        assert_eq!(g.pos(TileId(23)), p(3, 2));
        assert_eq!(g.id(p(10, 0)), None);
        assert_eq!(g.id(p(0, 8)), None);
    }

    #[test]
    fn adjacency_skips_off_grid_sides() {
        let g = Grid::new(4, 4, 50);
        let corner: Vec<_> = g.adjacent(p(0, 0)).map(|(d, _)| d).collect();
        assert_eq!(corner, vec![Direction::Right, Direction::Down]);
        assert_eq!(g.adjacent(p(1, 1)).count(), 4);
    }

    #[test]
    fn element_center_uses_tile_size() {
        let g = Grid::new(4, 4, 50);
        let e = g.make_element(ElementKind::Track, p(1, 2));
        assert_eq!(e.center(), Point::new(75.0, 125.0));
        assert_eq!(e.side_point(Direction::Left), Point::new(50.0, 125.0));
        assert_eq!(e.side_point(Direction::Down), Point::new(75.0, 150.0));
    }

    #[test]
    fn iter_is_row_major_over_occupied_tiles() {
        let mut m = map();
        m.add_track(p(5, 5)).unwrap();
        m.add_track(p(1, 0)).unwrap();
        let tiles: Vec<_> = m.grid().iter().map(|(_, e)| e.tile()).collect();
        assert_eq!(tiles, vec![p(1, 0), p(5, 5)]);
        assert_eq!(m.grid().len(), 2);
    }
}

// ── Element geometry ──────────────────────────────────────────────────────────

#[cfg(test)]
mod element {
    use tr_core::{Direction, Vector};
    use super::helpers::{el, map, p};

    #[test]
    fn isolated_track_defaults_left_to_right() {
        let mut m = map();
        m.add_track(p(4, 4)).unwrap();
        let t = el(&m, 4, 4);
        assert_eq!(t.end1(), Some(Direction::Left));
        assert_eq!(t.end2(), Some(Direction::Right));
        assert_eq!(t.versor(), Vector::new(1.0, 0.0));
        assert!(t.previous().is_none() && t.next().is_none());
    }

    #[test]
    fn curve_versor_is_diagonal_unit() {
        let mut m = map();
        m.add_base_station(p(2, 2)).unwrap();
        m.add_track(p(2, 3)).unwrap();
        m.add_track(p(3, 3)).unwrap();
        // (2,3) enters from Up and leaves Right.
        let t = el(&m, 2, 3);
        assert_eq!(t.end1(), Some(Direction::Up));
        assert_eq!(t.end2(), Some(Direction::Right));
        let v = t.versor();
        assert!((v.length() - 1.0).abs() < 1e-9);
        assert!(v.dx > 0.0 && v.dy > 0.0);
    }

    #[test]
    fn isolated_base_station_has_no_exit() {
        let mut m = map();
        m.add_base_station(p(0, 0)).unwrap();
        let b = el(&m, 0, 0);
        assert_eq!(b.end2(), None);
        assert!(b.versor().is_zero());
    }
}

// ── Placement & auto-wiring ───────────────────────────────────────────────────

#[cfg(test)]
mod placement {
    use tr_core::{Color, Direction, GameRng};
    use super::helpers::{assert_sound, el, id, map, p, row_of_three};
    use crate::{ElementKind, MapError};

    #[test]
    fn click_laid_row_links_in_order() {
        let m = row_of_three();
        assert_eq!(el(&m, 2, 3).next(), Some(id(&m, 3, 3)));
        assert_eq!(el(&m, 3, 3).previous(), Some(id(&m, 2, 3)));
        assert_eq!(el(&m, 3, 3).next(), Some(id(&m, 4, 3)));
        assert_eq!(el(&m, 4, 3).previous(), Some(id(&m, 3, 3)));
        assert_eq!(el(&m, 4, 3).end2(), Some(Direction::Right));
        assert_sound(&m);
    }

    #[test]
    fn occupied_and_out_of_bounds_are_rejected() {
        let mut m = row_of_three();
        let before = m.clone();
        assert_eq!(m.add_track(p(3, 3)), Err(MapError::Occupied(p(3, 3))));
        assert_eq!(m.add_track(p(10, 3)), Err(MapError::OutOfBounds(p(10, 3))));
        assert_eq!(m, before);
    }

    #[test]
    fn base_station_beats_track_as_upstream() {
        let mut m = map();
        m.add_base_station(p(5, 4)).unwrap();
        m.add_track(p(4, 5)).unwrap();
        m.add_track(p(5, 5)).unwrap();
        let t = el(&m, 5, 5);
        assert_eq!(t.previous(), Some(id(&m, 5, 4)));
        assert_eq!(t.end1(), Some(Direction::Up));
        // The free left track becomes its downstream neighbor.
        assert_eq!(t.next(), Some(id(&m, 4, 5)));
        assert_eq!(el(&m, 4, 5).end1(), Some(Direction::Right));
        assert_eq!(el(&m, 4, 5).end2(), Some(Direction::Left));
        assert_sound(&m);
    }

    #[test]
    fn equal_rank_ties_go_to_the_left() {
        let mut m = map();
        m.add_track(p(4, 5)).unwrap();
        m.add_track(p(6, 5)).unwrap();
        m.add_track(p(5, 5)).unwrap();
        assert_eq!(el(&m, 5, 5).previous(), Some(id(&m, 4, 5)));
        assert_eq!(el(&m, 5, 5).next(), Some(id(&m, 6, 5)));
        assert_sound(&m);
    }

    #[test]
    fn linked_track_is_never_a_downstream_target() {
        let mut m = row_of_three();
        // (3,4) sits under (3,3), which already has a predecessor.
        m.add_track(p(3, 4)).unwrap();
        let t = el(&m, 3, 4);
        assert_ne!(t.next(), Some(id(&m, 3, 3)));
        assert_sound(&m);
    }

    #[test]
    fn switch_takes_over_track_links() {
        let mut m = row_of_three();
        m.add_switch(p(3, 3)).unwrap();
        let s = el(&m, 3, 3);
        assert!(s.is_switch());
        assert_eq!(s.previous(), Some(id(&m, 2, 3)));
        assert_eq!(s.next(), Some(id(&m, 4, 3)));
        assert_eq!(s.end1(), Some(Direction::Left));
        assert_eq!(s.end2(), Some(Direction::Right));
        assert_eq!(s.end2_inactive(), Some(Direction::Up));
        assert_eq!(s.next_inactive(), None);
        assert_eq!(el(&m, 2, 3).next(), Some(id(&m, 3, 3)));
        assert_sound(&m);
    }

    #[test]
    fn switch_inactive_branch_finds_free_track() {
        let mut m = row_of_three();
        m.add_track(p(3, 4)).unwrap();
        assert!(el(&m, 3, 4).previous().is_none());
        m.add_switch(p(3, 3)).unwrap();
        assert_eq!(el(&m, 3, 3).next_inactive(), Some(id(&m, 3, 4)));
        assert_eq!(el(&m, 3, 3).end2_inactive(), Some(Direction::Down));
        assert_eq!(el(&m, 3, 4).previous(), Some(id(&m, 3, 3)));
        assert_sound(&m);
    }

    #[test]
    fn switch_on_station_is_rejected() {
        let mut m = map();
        m.add_station_with_color(p(1, 1), Color::Red).unwrap();
        assert_eq!(m.add_switch(p(1, 1)), Err(MapError::Occupied(p(1, 1))));
    }

    #[test]
    fn toggle_is_an_involution() {
        let mut m = row_of_three();
        m.add_switch(p(3, 3)).unwrap();
        let before = el(&m, 3, 3).clone();
        m.toggle_switch(p(3, 3)).unwrap();
        let toggled = el(&m, 3, 3);
        assert_eq!(toggled.end2(), Some(Direction::Up));
        assert_eq!(toggled.next(), None);
        assert_eq!(toggled.end2_inactive(), Some(Direction::Right));
        assert_eq!(toggled.next_inactive(), Some(id(&m, 4, 3)));
        assert_sound(&m);
        m.toggle_switch(p(3, 3)).unwrap();
        assert_eq!(el(&m, 3, 3), &before);
    }

    #[test]
    fn toggle_requires_a_switch() {
        let mut m = row_of_three();
        assert_eq!(m.toggle_switch(p(2, 3)), Err(MapError::NotASwitch(p(2, 3))));
        assert_eq!(m.toggle_switch(p(7, 7)), Err(MapError::NotASwitch(p(7, 7))));
    }

    #[test]
    fn single_base_station() {
        let mut m = map();
        m.add_base_station(p(0, 0)).unwrap();
        m.add_base_station(p(5, 5)).unwrap();
        assert!(m.at(p(0, 0)).is_none());
        assert_eq!(m.base_station(), Some(id(&m, 5, 5)));
        let bases = m
            .grid()
            .iter()
            .filter(|(_, e)| matches!(e.kind(), ElementKind::BaseStation))
            .count();
        assert_eq!(bases, 1);
        assert_sound(&m);
    }

    #[test]
    fn station_colors_are_unique_until_exhausted() {
        let mut m = map();
        let mut rng = GameRng::new(7);
        for i in 0..7 {
            m.add_station(p(i, 0), &mut rng).unwrap();
        }
        let mut colors = m.station_colors();
        colors.sort_by_key(|c| c.as_str());
        colors.dedup();
        assert_eq!(colors.len(), 7);
        assert!(m.station_colors_exhausted());
        assert_eq!(m.add_station(p(0, 5), &mut rng), Err(MapError::StationColorsExhausted));
        assert_eq!(
            m.add_station_with_color(p(0, 5), Color::Red),
            Err(MapError::StationColorsExhausted)
        );
        assert_sound(&m);
    }

    #[test]
    fn duplicate_color_is_rejected() {
        let mut m = map();
        m.add_station_with_color(p(0, 0), Color::Blue).unwrap();
        assert_eq!(
            m.add_station_with_color(p(5, 5), Color::Blue),
            Err(MapError::ColorInUse(Color::Blue))
        );
        assert_eq!(m.free_station_colors().len(), 6);
    }

    #[test]
    fn station_links_to_track_end() {
        let mut m = row_of_three();
        m.add_station_with_color(p(5, 3), Color::Green).unwrap();
        assert_eq!(el(&m, 4, 3).next(), Some(id(&m, 5, 3)));
        assert_eq!(el(&m, 5, 3).end1(), Some(Direction::Left));
        assert_eq!(m.stations(), &[id(&m, 5, 3)]);
        assert_sound(&m);
    }
}

// ── Erase ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod erase {
    use tr_core::{Color, Direction};
    use super::helpers::{assert_sound, el, id, map, p, row_of_three};
    use crate::MapError;

    #[test]
    fn erase_clears_both_neighbors() {
        let mut m = row_of_three();
        let removed = m.erase(p(3, 3)).unwrap();
        assert!(removed.is_track());
        assert!(m.at(p(3, 3)).is_none());
        assert_eq!(el(&m, 2, 3).next(), None);
        assert_eq!(el(&m, 4, 3).previous(), None);
        assert_sound(&m);
    }

    #[test]
    fn erase_then_replace_relinks() {
        let mut m = row_of_three();
        m.erase(p(3, 3)).unwrap();
        m.add_track(p(3, 3)).unwrap();
        assert_eq!(el(&m, 2, 3).next(), Some(id(&m, 3, 3)));
        assert_eq!(el(&m, 3, 3).next(), Some(id(&m, 4, 3)));
        assert_sound(&m);
    }

    #[test]
    fn erase_switch_frees_inactive_neighbor() {
        let mut m = row_of_three();
        m.add_track(p(3, 4)).unwrap();
        m.add_switch(p(3, 3)).unwrap();
        m.erase(p(3, 3)).unwrap();
        assert_eq!(el(&m, 3, 4).previous(), None);
        assert_eq!(el(&m, 4, 3).previous(), None);
        assert_sound(&m);
    }

    #[test]
    fn erase_station_updates_registry() {
        let mut m = map();
        m.add_station_with_color(p(1, 1), Color::Purple).unwrap();
        m.erase(p(1, 1)).unwrap();
        assert!(m.stations().is_empty());
        assert_eq!(m.free_station_colors().len(), 7);
        m.add_station_with_color(p(2, 2), Color::Purple).unwrap();
        assert_sound(&m);
    }

    #[test]
    fn erase_base_station_frees_singleton() {
        let mut m = map();
        m.add_base_station(p(1, 1)).unwrap();
        m.add_track(p(1, 2)).unwrap();
        assert_eq!(el(&m, 1, 2).end1(), Some(Direction::Up));
        m.erase(p(1, 1)).unwrap();
        assert_eq!(m.base_station(), None);
        assert_eq!(el(&m, 1, 2).previous(), None);
        assert_sound(&m);
    }

    #[test]
    fn erase_empty_tile_fails() {
        let mut m = map();
        assert_eq!(m.erase(p(1, 1)).unwrap_err(), MapError::Empty(p(1, 1)));
    }
}

// ── Drag chains ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod drag {
    use tr_core::{Color, Direction};
    use super::helpers::{assert_sound, el, id, map, p};
    use crate::MapError;

    #[test]
    fn drag_from_base_to_station() {
        let mut m = map();
        m.add_base_station(p(2, 2)).unwrap();
        m.add_station_with_color(p(2, 5), Color::Red).unwrap();

        m.begin_drag(p(2, 2)).unwrap();
        assert!(m.is_dragging());
        assert_eq!(m.drag_to(p(2, 5)).unwrap(), 2);
        let linked = m.end_drag().unwrap();
        assert!(!m.is_dragging());
        assert_eq!(linked, Some(id(&m, 2, 5)));

        let base = el(&m, 2, 2);
        assert_eq!(base.next(), Some(id(&m, 2, 3)));
        assert_eq!(base.end2(), Some(Direction::Down));
        for y in [3, 4] {
            let t = el(&m, 2, y);
            assert_eq!(t.previous(), Some(id(&m, 2, y - 1)));
            assert_eq!(t.next(), Some(id(&m, 2, y + 1)));
            assert_eq!((t.end1(), t.end2()), (Some(Direction::Up), Some(Direction::Down)));
        }
        assert_eq!(el(&m, 2, 5).previous(), Some(id(&m, 2, 4)));
        assert_sound(&m);
    }

    #[test]
    fn drag_bends_along_manhattan_path() {
        let mut m = map();
        m.begin_drag(p(1, 1)).unwrap();
        assert_eq!(m.drag_to(p(3, 2)).unwrap(), 3);
        m.end_drag().unwrap();
        // x first: (1,1) -> (2,1) -> (3,1) -> (3,2)
        let corner = el(&m, 3, 1);
        assert_eq!(corner.end1(), Some(Direction::Left));
        assert_eq!(corner.end2(), Some(Direction::Down));
        assert_eq!(el(&m, 1, 1).next(), Some(id(&m, 2, 1)));
        assert_eq!(el(&m, 3, 2).end1(), Some(Direction::Up));
        assert_eq!(el(&m, 3, 2).end2(), Some(Direction::Down));
        assert_sound(&m);
    }

    #[test]
    fn drag_does_not_cross_link_into_side_track() {
        let mut m = map();
        m.add_track(p(2, 0)).unwrap();
        m.begin_drag(p(0, 1)).unwrap();
        m.drag_to(p(3, 1)).unwrap();
        m.end_drag().unwrap();
        // (2,1) passed right under the free (2,0) without linking to it.
        let t = el(&m, 2, 1);
        assert_eq!(t.previous(), Some(id(&m, 1, 1)));
        assert_eq!(t.next(), Some(id(&m, 3, 1)));
        assert_eq!(el(&m, 2, 0).next(), None);
        assert_sound(&m);
    }

    #[test]
    fn drag_stops_at_occupied_tile_and_links_it() {
        let mut m = map();
        m.add_track(p(3, 0)).unwrap();
        m.begin_drag(p(0, 0)).unwrap();
        assert_eq!(m.drag_to(p(5, 0)).unwrap(), 2);
        assert!(m.at(p(4, 0)).is_none());
        m.end_drag().unwrap();
        assert_eq!(el(&m, 3, 0).previous(), Some(id(&m, 2, 0)));
        assert_sound(&m);
    }

    #[test]
    fn drag_resumes_from_existing_element() {
        let mut m = map();
        m.add_track(p(0, 0)).unwrap();
        m.begin_drag(p(0, 0)).unwrap();
        m.drag_to(p(0, 2)).unwrap();
        m.end_drag().unwrap();
        let head = el(&m, 0, 0);
        assert_eq!(head.next(), Some(id(&m, 0, 1)));
        assert_eq!(head.end2(), Some(Direction::Down));
        assert_sound(&m);
    }

    #[test]
    fn drag_overrides_click_link_of_head() {
        let mut m = map();
        m.add_station_with_color(p(2, 1), Color::Red).unwrap();
        // (1,1) feeds the free station on click; the drag then heads down.
        m.begin_drag(p(1, 1)).unwrap();
        assert_eq!(el(&m, 1, 1).next(), Some(id(&m, 2, 1)));
        m.drag_to(p(1, 2)).unwrap();
        assert_eq!(el(&m, 1, 1).next(), Some(id(&m, 1, 2)));
        assert_eq!(el(&m, 2, 1).previous(), None);
        m.end_drag().unwrap();
        assert_sound(&m);
    }

    #[test]
    fn drag_requires_gesture() {
        let mut m = map();
        assert_eq!(m.drag_to(p(1, 1)), Err(MapError::NoDrag));
        assert_eq!(m.end_drag(), Err(MapError::NoDrag));
    }

    #[test]
    fn begin_on_full_element_fails() {
        let mut m = map();
        m.add_station_with_color(p(1, 1), Color::Red).unwrap();
        assert_eq!(m.begin_drag(p(1, 1)), Err(MapError::Occupied(p(1, 1))));
    }

    #[test]
    fn erasing_chain_tile_abandons_drag() {
        let mut m = map();
        m.begin_drag(p(0, 0)).unwrap();
        m.drag_to(p(2, 0)).unwrap();
        m.erase(p(1, 0)).unwrap();
        assert!(!m.is_dragging());
        assert_sound(&m);
    }
}

// ── Topology checker ──────────────────────────────────────────────────────────

#[cfg(test)]
mod topology {
    use super::helpers::{id, row_of_three};
    use crate::{End, TopologyIssue};

    #[test]
    fn one_way_link_is_reported() {
        let mut m = row_of_three();
        let mid = id(&m, 3, 3);
        if let Some(e) = m.grid.get_mut(mid) {
            e.detach(End::Upstream);
        }
        let issues = m.check_topology();
        assert!(
            issues.iter().any(|i| matches!(i, TopologyIssue::OneWayLink { .. })),
            "{issues:?}"
        );
    }

    #[test]
    fn registry_drift_is_reported() {
        let mut m = row_of_three();
        m.stations.push(id(&m, 2, 3));
        assert!(m.check_topology().contains(&TopologyIssue::StationRegistry));
    }
}

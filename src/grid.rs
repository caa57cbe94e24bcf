//! Structured model grids and coordinate bracketing.

pub mod altitude;
pub mod boundary;
pub mod cell;
pub mod model;

/// Floating-point precision to use for grid coordinates.
#[allow(non_camel_case_types)]
pub type fgr = f64;

/// Result of searching an ascending coordinate array for a query coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BracketQuery {
    /// The query lies inside the coordinate range at the contained index.
    Inside(usize),
    /// The query lies below the first coordinate (or is NaN).
    Below,
    /// The query lies above the last coordinate.
    Above,
}

impl BracketQuery {
    /// Returns the index if the query was inside the coordinate range.
    pub fn inside(self) -> Option<usize> {
        match self {
            Self::Inside(idx) => Some(idx),
            _ => None,
        }
    }
}

/// Finds the largest index `i` such that `coords[i] <= coord`.
///
/// # Parameters
///
/// - `coords`: Strictly ascending coordinates.
/// - `coord`: Query coordinate.
///
/// # Returns
///
/// A `BracketQuery` which is either:
///
/// - `Inside`: Contains the index of the node at or below the query.
/// - `Below`: The query is smaller than the first coordinate.
/// - `Above`: The query is larger than the last coordinate.
pub fn find_lower_node(coords: &[fgr], coord: fgr) -> BracketQuery {
    let n_at_or_below = coords.partition_point(|&node_coord| node_coord <= coord);
    if n_at_or_below == 0 {
        BracketQuery::Below
    } else if n_at_or_below == coords.len() && coord > coords[coords.len() - 1] {
        BracketQuery::Above
    } else {
        BracketQuery::Inside(n_at_or_below - 1)
    }
}

/// Finds the index `i` of the lower edge of the interval `coords[i] <= coord < coords[i+1]`.
///
/// A query exactly at the last coordinate belongs to the last interval. For a
/// single coordinate, a query equal to it gives index zero.
pub fn search_idx_of_coord(coords: &[fgr], coord: fgr) -> BracketQuery {
    match find_lower_node(coords, coord) {
        BracketQuery::Inside(idx) if idx + 1 == coords.len() && idx > 0 => {
            BracketQuery::Inside(idx - 1)
        }
        query => query,
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn bracket_search_finds_lower_edge() {
        let coords = [-10.0, 0.0, 10.0, 20.0];
        assert_eq!(search_idx_of_coord(&coords, -10.0), BracketQuery::Inside(0));
        assert_eq!(search_idx_of_coord(&coords, 5.0), BracketQuery::Inside(1));
        assert_eq!(search_idx_of_coord(&coords, 10.0), BracketQuery::Inside(2));
        assert_eq!(search_idx_of_coord(&coords, 20.0), BracketQuery::Inside(2));
        assert_eq!(search_idx_of_coord(&coords, -10.1), BracketQuery::Below);
        assert_eq!(search_idx_of_coord(&coords, 20.1), BracketQuery::Above);
        assert_eq!(search_idx_of_coord(&coords, fgr::NAN), BracketQuery::Below);
    }

    #[test]
    fn lower_node_search_includes_last_node() {
        let coords = [0.0, 1.0, 2.0];
        assert_eq!(find_lower_node(&coords, 2.0), BracketQuery::Inside(2));
        assert_eq!(find_lower_node(&coords, 1.5), BracketQuery::Inside(1));
        assert_eq!(find_lower_node(&[3.0], 3.0), BracketQuery::Inside(0));
        assert_eq!(search_idx_of_coord(&[3.0], 3.0), BracketQuery::Inside(0));
    }

    #[test]
    fn bracket_search_is_monotonic() {
        let coords: Vec<fgr> = (0..40).map(|i| (i as fgr).powf(1.3) - 7.0).collect();
        let lower = coords[0];
        let upper = coords[coords.len() - 1];
        let queries: Vec<fgr> = (0..=500)
            .map(|i| lower + (upper - lower) * (i as fgr) / 500.0)
            .collect();
        for pair in queries.windows(2) {
            let first = search_idx_of_coord(&coords, pair[0]).inside().unwrap();
            let second = search_idx_of_coord(&coords, pair[1]).inside().unwrap();
            assert!(first <= second);
            assert!(coords[first] <= pair[0] && pair[0] <= coords[first + 1]);
        }
    }
}

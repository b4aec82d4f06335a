use core::ops::Deref;
use core::slice;

use serde::{Deserialize, Serialize};

use super::point::Point;

/// Densely sampled path, serialized as a JSON array of `[x, y]` pairs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DensePath(Vec<Point>);

impl DensePath {
    pub fn with_capacity(capacity: usize) -> Self {
        DensePath(Vec::with_capacity(capacity))
    }

    pub fn push(&mut self, point: Point) {
        self.0.push(point)
    }

    /// Compact JSON, e.g. `[[100,200],[103,198]]`.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Parse the JSON point-array format. `null` entries are dropped.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let entries: Vec<Option<Point>> = serde_json::from_str(json)?;
        Ok(DensePath(entries.into_iter().flatten().collect()))
    }
}

impl Deref for DensePath {
    type Target = [Point];

    fn deref(&self) -> &[Point] {
        &self.0
    }
}

impl From<Vec<Point>> for DensePath {
    fn from(points: Vec<Point>) -> Self {
        DensePath(points)
    }
}

impl FromIterator<Point> for DensePath {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        DensePath(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a DensePath {
    type Item = &'a Point;
    type IntoIter = slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_round_trip() {
        let path: DensePath = [(100, 200), (103, 198), (-7, 0)]
            .into_iter()
            .map(Point::from)
            .collect();
        let json = path.to_json().unwrap();
        assert_eq!(json, "[[100,200],[103,198],[-7,0]]");
        assert_eq!(DensePath::from_json(&json).unwrap(), path);
    }

    #[test]
    fn nulls_are_dropped() {
        let path = DensePath::from_json("[[1,2],null,[3,4]]").unwrap();
        assert_eq!(&path[..], &[Point::new(1, 2), Point::new(3, 4)]);
    }

    #[test]
    fn malformed_entries_fail() {
        assert!(DensePath::from_json("[[1,2,3]]").is_err());
        assert!(DensePath::from_json("[[1]]").is_err());
    }
}

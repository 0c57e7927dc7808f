
/// Keeps track of the two smallest distances seen so far, and the indices they came from.
///
/// Comparisons are strict, so when two candidates are equally close the one inserted first
/// wins.
pub(crate) struct NearestTwoTracker<S> {
    nearest: Option<(S, usize)>,
    second: Option<(S, usize)>,
}

impl<S: PartialOrd + Copy> Default for NearestTwoTracker<S> {
    fn default() -> Self {
        Self {
            nearest: None,
            second: None,
        }
    }
}

impl<S: PartialOrd + Copy> NearestTwoTracker<S> {
    #[inline(always)]
    fn is_closer(distance: S, current: Option<(S, usize)>) -> bool {
        match current {
            Some((best, _)) => distance < best,
            None => true,
        }
    }

    #[inline(always)]
    pub(crate) fn insert(&mut self, distance: S, index: usize) {
        if Self::is_closer(distance, self.nearest) {
            self.second = self.nearest;
            self.nearest = Some((distance, index));
        } else if Self::is_closer(distance, self.second) {
            self.second = Some((distance, index));
        }
    }

    /// Returns the indices of the nearest and second nearest candidates, if two were inserted
    #[inline(always)]
    pub(crate) fn get(&self) -> Option<(usize, usize)> {
        match (self.nearest, self.second) {
            (Some((_, first)), Some((_, second))) => Some((first, second)),
            _ => None,
        }
    }
}

/// Session-local count of resume downloads. Display only: nothing is
/// persisted and there is no failure path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DownloadCounter(u32);

impl DownloadCounter {
    /// Record one click on the download trigger and return the new total.
    pub fn record(&mut self) -> u32 {
        self.0 += 1;
        self.0
    }

    pub fn count(&self) -> u32 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_clicks_read_three() {
        let mut counter = DownloadCounter::default();
        counter.record();
        counter.record();
        assert_eq!(counter.record(), 3);
        assert_eq!(counter.count(), 3);
    }

    #[test]
    fn starts_at_zero() {
        assert_eq!(DownloadCounter::default().count(), 0);
    }
}

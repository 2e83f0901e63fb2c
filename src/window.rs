//! Time-window selections and their upstream encodings.
//!
//! The two CoinGecko endpoints use unrelated parameter vocabularies: the
//! markets list takes a suffix code (`price_change_percentage=7d`) while
//! the history endpoint takes an integer day count (`days=30`). Each
//! window kind encodes only for its own endpoint so neither vocabulary
//! leaks into the other's call site.

use std::str::FromStr;

use crate::error::CoinwatchError;

/// Time window for the percentage-change column of the list view.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ListWindow {
    Hourly,
    #[default]
    Daily,
    Weekly,
    Monthly,
    YearToDate,
}

impl ListWindow {
    /// All windows in selector order.
    pub const ALL: [ListWindow; 5] = [
        ListWindow::Hourly,
        ListWindow::Daily,
        ListWindow::Weekly,
        ListWindow::Monthly,
        ListWindow::YearToDate,
    ];

    /// Returns the `price_change_percentage` query value for the markets
    /// list endpoint.
    pub fn query_param(self) -> &'static str {
        match self {
            ListWindow::Hourly => "1h",
            ListWindow::Daily => "24h",
            ListWindow::Weekly => "7d",
            ListWindow::Monthly => "30d",
            ListWindow::YearToDate => "1y",
        }
    }

    /// Returns the display label.
    pub fn label(self) -> &'static str {
        match self {
            ListWindow::Hourly => "Hourly",
            ListWindow::Daily => "Daily",
            ListWindow::Weekly => "Weekly",
            ListWindow::Monthly => "Monthly",
            ListWindow::YearToDate => "YTD",
        }
    }

    /// Returns the next window in selector order, wrapping around.
    pub fn next(self) -> Self {
        let pos = Self::ALL.iter().position(|w| *w == self).unwrap_or(0);
        Self::ALL[(pos + 1) % Self::ALL.len()]
    }

    /// Returns the previous window in selector order, wrapping around.
    pub fn previous(self) -> Self {
        let pos = Self::ALL.iter().position(|w| *w == self).unwrap_or(0);
        Self::ALL[pos.checked_sub(1).unwrap_or(Self::ALL.len() - 1)]
    }
}

impl FromStr for ListWindow {
    type Err = CoinwatchError;

    /// Parses the suffix code (`"1h"`, `"24h"`, `"7d"`, `"30d"`, `"1y"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1h" => Ok(ListWindow::Hourly),
            "24h" => Ok(ListWindow::Daily),
            "7d" => Ok(ListWindow::Weekly),
            "30d" => Ok(ListWindow::Monthly),
            "1y" => Ok(ListWindow::YearToDate),
            other => Err(CoinwatchError::UnsupportedWindow(other.to_string())),
        }
    }
}

/// Time window for the per-asset historical chart.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ChartWindow {
    Day,
    #[default]
    Week,
    Month,
    Quarter,
    Year,
}

impl ChartWindow {
    /// All windows in selector order.
    pub const ALL: [ChartWindow; 5] = [
        ChartWindow::Day,
        ChartWindow::Week,
        ChartWindow::Month,
        ChartWindow::Quarter,
        ChartWindow::Year,
    ];

    /// Returns the `days` query value for the market chart endpoint.
    pub fn days(self) -> u32 {
        match self {
            ChartWindow::Day => 1,
            ChartWindow::Week => 7,
            ChartWindow::Month => 30,
            ChartWindow::Quarter => 90,
            ChartWindow::Year => 365,
        }
    }

    /// Returns the display label.
    pub fn label(self) -> &'static str {
        match self {
            ChartWindow::Day => "1d",
            ChartWindow::Week => "7d",
            ChartWindow::Month => "30d",
            ChartWindow::Quarter => "90d",
            ChartWindow::Year => "1y",
        }
    }

    /// Returns the next window in selector order, wrapping around.
    pub fn next(self) -> Self {
        let pos = Self::ALL.iter().position(|w| *w == self).unwrap_or(0);
        Self::ALL[(pos + 1) % Self::ALL.len()]
    }

    /// Returns the previous window in selector order, wrapping around.
    pub fn previous(self) -> Self {
        let pos = Self::ALL.iter().position(|w| *w == self).unwrap_or(0);
        Self::ALL[pos.checked_sub(1).unwrap_or(Self::ALL.len() - 1)]
    }
}

impl FromStr for ChartWindow {
    type Err = CoinwatchError;

    /// Parses a day count (`"1"`, `"7"`, `"30"`, `"90"`, `"365"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1" => Ok(ChartWindow::Day),
            "7" => Ok(ChartWindow::Week),
            "30" => Ok(ChartWindow::Month),
            "90" => Ok(ChartWindow::Quarter),
            "365" => Ok(ChartWindow::Year),
            other => Err(CoinwatchError::UnsupportedWindow(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_list_window_encodes() {
        for window in ListWindow::ALL {
            assert!(!window.query_param().is_empty());
            assert!(!window.label().is_empty());
        }
    }

    #[test]
    fn every_chart_window_has_positive_day_count() {
        for window in ChartWindow::ALL {
            assert!(window.days() > 0);
        }
        assert_eq!(ChartWindow::Day.days(), 1);
        assert_eq!(ChartWindow::Week.days(), 7);
        assert_eq!(ChartWindow::Month.days(), 30);
        assert_eq!(ChartWindow::Quarter.days(), 90);
        assert_eq!(ChartWindow::Year.days(), 365);
    }

    #[test]
    fn list_window_round_trips_through_query_param() {
        for window in ListWindow::ALL {
            assert_eq!(window.query_param().parse::<ListWindow>().unwrap(), window);
        }
    }

    #[test]
    fn unknown_window_strings_are_rejected() {
        let err = "48h".parse::<ListWindow>().unwrap_err();
        assert!(matches!(err, CoinwatchError::UnsupportedWindow(_)));

        let err = "14".parse::<ChartWindow>().unwrap_err();
        assert!(matches!(err, CoinwatchError::UnsupportedWindow(_)));

        assert!("".parse::<ListWindow>().is_err());
    }

    #[test]
    fn cycling_wraps_in_both_directions() {
        assert_eq!(ListWindow::YearToDate.next(), ListWindow::Hourly);
        assert_eq!(ListWindow::Hourly.previous(), ListWindow::YearToDate);
        assert_eq!(ChartWindow::Year.next(), ChartWindow::Day);
        assert_eq!(ChartWindow::Day.previous(), ChartWindow::Year);

        let mut window = ListWindow::Hourly;
        for _ in 0..ListWindow::ALL.len() {
            window = window.next();
        }
        assert_eq!(window, ListWindow::Hourly);
    }
}

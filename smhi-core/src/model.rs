use serde::{Deserialize, Serialize};

/// One forecast time point from the SMHI time series.
///
/// All fields default to 0 when the corresponding parameter is absent
/// from the time-series entry. Values are never changed after mapping.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Forecast {
    /// Air temperature (Celsius).
    pub temperature: i32,
    /// Relative humidity (percent).
    pub humidity: i32,
    /// Air pressure (hPa).
    pub pressure: i32,
    /// Probability of thunder (percent).
    pub thunder: i32,
    /// Cloud cover (percent), converted from octas.
    pub cloudiness: i32,
    /// Weather symbol, category 1-27 (`Wsymb2`).
    pub symbol: i32,
}

impl Forecast {
    /// Human-readable text for the `Wsymb2` category of this forecast.
    pub fn symbol_description(&self) -> &'static str {
        match self.symbol {
            1 => "Clear sky",
            2 => "Nearly clear sky",
            3 => "Variable cloudiness",
            4 => "Halfclear sky",
            5 => "Cloudy sky",
            6 => "Overcast",
            7 => "Fog",
            8 => "Light rain showers",
            9 => "Moderate rain showers",
            10 => "Heavy rain showers",
            11 => "Thunderstorm",
            12 => "Light sleet showers",
            13 => "Moderate sleet showers",
            14 => "Heavy sleet showers",
            15 => "Light snow showers",
            16 => "Moderate snow showers",
            17 => "Heavy snow showers",
            18 => "Light rain",
            19 => "Moderate rain",
            20 => "Heavy rain",
            21 => "Thunder",
            22 => "Light sleet",
            23 => "Moderate sleet",
            24 => "Heavy sleet",
            25 => "Light snowfall",
            26 => "Moderate snowfall",
            27 => "Heavy snowfall",
            _ => "Unknown",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_forecast_is_all_zero() {
        let forecast = Forecast::default();
        assert_eq!(forecast.temperature, 0);
        assert_eq!(forecast.humidity, 0);
        assert_eq!(forecast.pressure, 0);
        assert_eq!(forecast.thunder, 0);
        assert_eq!(forecast.cloudiness, 0);
        assert_eq!(forecast.symbol, 0);
    }

    #[test]
    fn symbol_description_covers_categories() {
        let with_symbol = |symbol| Forecast { symbol, ..Forecast::default() };

        assert_eq!(with_symbol(1).symbol_description(), "Clear sky");
        assert_eq!(with_symbol(11).symbol_description(), "Thunderstorm");
        assert_eq!(with_symbol(27).symbol_description(), "Heavy snowfall");
        assert_eq!(with_symbol(0).symbol_description(), "Unknown");
        assert_eq!(with_symbol(28).symbol_description(), "Unknown");
    }
}

//! Projection of the raw SMHI JSON document into [`Forecast`] records.

use serde::Deserialize;
use serde_json::Value;
use tracing::trace;

use crate::error::SmhiError;
use crate::model::Forecast;

/// The parts of the API response this crate consumes. Real responses carry
/// more top-level fields (approved time, reference time, geometry); those
/// deserialize-and-drop here.
#[derive(Debug, Deserialize)]
struct ApiResponse {
    #[serde(rename = "timeSeries")]
    time_series: Vec<TimeSeriesEntry>,
}

#[derive(Debug, Deserialize)]
struct TimeSeriesEntry {
    parameters: Vec<Parameter>,
}

#[derive(Debug, Deserialize)]
struct Parameter {
    name: String,
    values: Vec<f64>,
}

/// Map a decoded API document to forecast records, one per time-series
/// entry, preserving the API's order (nearest time point first).
///
/// Unknown parameter names are ignored, so additional fields the API may
/// grow do not break the mapping. A document without `timeSeries`, or an
/// entry without `parameters`, fails with [`SmhiError::Malformed`].
pub fn forecasts_from_json(document: &Value) -> Result<Vec<Forecast>, SmhiError> {
    let response: ApiResponse = serde_json::from_value(document.clone())?;

    let forecasts: Vec<Forecast> = response.time_series.iter().map(forecast_from_entry).collect();
    trace!(count = forecasts.len(), "mapped time series");

    Ok(forecasts)
}

fn forecast_from_entry(entry: &TimeSeriesEntry) -> Forecast {
    let mut forecast = Forecast::default();

    for parameter in &entry.parameters {
        // Every parameter carries at least one value; only the first is used.
        let Some(value) = parameter.values.first().copied() else {
            continue;
        };

        match parameter.name.as_str() {
            "t" => forecast.temperature = value as i32,
            "r" => forecast.humidity = value as i32,
            "msl" => forecast.pressure = value as i32,
            "tstm" => forecast.thunder = value as i32,
            "tcc_mean" => forecast.cloudiness = octa_to_percent(value as i32),
            "Wsymb2" => forecast.symbol = value as i32,
            _ => {}
        }
    }

    forecast
}

/// Convert cloud cover in octas (0 clear .. 8 overcast) to percent.
/// Out-of-range values count as fully overcast.
fn octa_to_percent(octa: i32) -> i32 {
    if (0..=8).contains(&octa) {
        (f64::from(octa) * 100.0 / 8.0).round() as i32
    } else {
        100
    }
}

use geo::{MultiPoint, Point};
use geojson::{Feature, FeatureCollection, Geometry, Value as GeoJsonValue};
use serde_json::json;

use crate::{Error, Meters};

/// Converts one sweep sample to a GeoJSON `FeatureCollection` holding a
/// single MultiPoint feature tagged with the sampled distance.
///
/// # Errors
///
/// Returns an error if the feature cannot be assembled.
pub fn fault_locations_to_geojson(
    distance_meters: Meters,
    locations: &[Point<f64>],
) -> Result<FeatureCollection, Error> {
    let multi_point = MultiPoint::new(locations.to_vec());
    let geometry = Geometry::new(GeoJsonValue::from(&multi_point));

    let value = json!({
        "type": "Feature",
        "geometry": geometry,
        "properties": {
            "distance_meters": distance_meters,
            "count": locations.len(),
        }
    });

    let feature: Feature =
        serde_json::from_value(value).map_err(|e| Error::GeoJsonError(e.to_string()))?;

    Ok(FeatureCollection {
        features: vec![feature],
        bbox: None,
        foreign_members: None,
    })
}

/// String form of [`fault_locations_to_geojson`], ready to write to a file.
///
/// # Errors
///
/// Returns an error if the collection cannot be serialized.
pub fn fault_locations_to_geojson_string(
    distance_meters: Meters,
    locations: &[Point<f64>],
) -> Result<String, Error> {
    serde_json::to_string(&fault_locations_to_geojson(distance_meters, locations)?)
        .map_err(|e| Error::GeoJsonError(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_becomes_a_multipoint_feature() {
        let locations = vec![Point::new(0.001, 0.0), Point::new(0.001, 0.002)];
        let collection = fault_locations_to_geojson(150.0, &locations).unwrap();

        assert_eq!(collection.features.len(), 1);
        let feature = &collection.features[0];

        match &feature.geometry.as_ref().unwrap().value {
            GeoJsonValue::MultiPoint { coordinates: points } => assert_eq!(points.len(), 2),
            other => panic!("expected a MultiPoint, got {other:?}"),
        }
        assert_eq!(
            feature.property("distance_meters").and_then(|v| v.as_f64()),
            Some(150.0)
        );
    }

    #[test]
    fn string_form_round_trips_through_the_parser() {
        let raw = fault_locations_to_geojson_string(10.0, &[Point::new(0.0, 0.0)]).unwrap();
        assert!(raw.parse::<geojson::GeoJson>().is_ok());
    }
}

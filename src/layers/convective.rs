use super::{ConvectiveClouds, ProfilePoint};
use metfor::{Celsius, Meters, Quantity};

/// Meters of cloud base height per degree of dew point depression (Hennig).
const HENNIG_FACTOR: f64 = 122.6;
/// Levels drier than this are above the cloud top.
const MAX_CLOUD_SPREAD: f64 = 3.0;

/// Estimate the base and top of convective clouds.
///
/// The base comes from the surface dew point depression. Clouds only form when that base is below
/// the top of the boundary layer, otherwise `None` is returned. The top is found by climbing the
/// `profile` (sorted by ascending altitude) from the top of the boundary layer for as long as the
/// air stays nearly saturated, and is never below the boundary layer top.
///
/// # Examples
///
/// ```rust
/// use location_forecast::layers::{convective_clouds, ProfilePoint};
/// use metfor::{Celsius, Meters};
///
/// let pt = |altitude: f64, temperature: f64, dew_point: f64| ProfilePoint {
///     altitude: Meters(altitude),
///     temperature: Celsius(temperature),
///     dew_point: Celsius(dew_point),
/// };
/// let profile = [pt(2000.0, 5.0, 4.0), pt(3000.0, -1.0, -10.0)];
/// let (ground, depth) = (Meters(500.0), Meters(1000.0));
///
/// // Dry surface, the base is far above the boundary layer.
/// let clouds = convective_clouds(Celsius(30.0), Celsius(5.0), ground, depth, &profile);
/// assert!(clouds.is_none());
///
/// let clouds = convective_clouds(Celsius(20.0), Celsius(12.0), ground, depth, &profile).unwrap();
/// assert!(clouds.bottom < Meters(1500.0));
/// assert!(clouds.top > Meters(1500.0));
/// ```
pub fn convective_clouds(
    surface_temperature: Celsius,
    surface_dew_point: Celsius,
    ground_elevation: Meters,
    boundary_layer_depth: Meters,
    profile: &[ProfilePoint],
) -> Option<ConvectiveClouds> {
    let ground = ground_elevation.unpack();
    let base =
        HENNIG_FACTOR * (surface_temperature.unpack() - surface_dew_point.unpack()) + ground;
    let boundary_top = ground + boundary_layer_depth.unpack();

    if base >= boundary_top {
        return None;
    }

    let top = profile
        .iter()
        // Start from the top of the boundary layer
        .skip_while(|pt| pt.altitude.unpack() <= boundary_top)
        // Climb while the air is still nearly saturated
        .take_while(|pt| pt.spread() < MAX_CLOUD_SPREAD)
        .last()
        .map(|pt| (pt.altitude.unpack() - HENNIG_FACTOR * pt.spread()).max(boundary_top))
        .unwrap_or(boundary_top);

    Some(ConvectiveClouds {
        bottom: Meters(base),
        top: Meters(top),
    })
}

/// A trait to convert distances between kilometers, meters and miles.
pub trait DistanceConversions {
    /// Returns the value in miles by treating `self` as the value in kilometers.
    fn km_to_miles(self) -> Self;

    /// Returns the value in meters by treating `self` as the value in miles.
    fn miles_to_meters(self) -> Self;

    /// Returns the value in meters by treating `self` as the value in kilometers.
    fn km_to_meters(self) -> Self;

    /// Returns the value in kilometers by treating `self` as the value in meters.
    fn meters_to_km(self) -> Self;
}

macro_rules! impl_distance_conversions {
    ($($t:ty)*) => ($(
        impl DistanceConversions for $t {
            fn km_to_miles(self) -> $t {
                self * 0.62137119
            }
            fn miles_to_meters(self) -> $t {
                self * 1069.344
            }
            fn km_to_meters(self) -> $t {
                self * 1000.0
            }
            fn meters_to_km(self) -> $t {
                self / 1000.0
            }
        }
    )*)
}

impl_distance_conversions! { f32 f64 }

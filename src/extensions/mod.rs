mod distance_ext;

pub use distance_ext::DistanceConversions;

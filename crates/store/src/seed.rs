//! Fixed data the store is populated with at process start.

use crate::{City, CityId, PointOfInterest, PointOfInterestId};

/// Returns the cities every fresh process starts with.
pub fn seed_cities() -> Vec<City> {
    vec![
        City::new(CityId::new(1), "New York City", "The one with that big park.")
            .with_point_of_interest(PointOfInterest::new(
                PointOfInterestId::new(1),
                "Central Park",
                "The most visited urban park in the United States.",
            ))
            .with_point_of_interest(PointOfInterest::new(
                PointOfInterestId::new(2),
                "Empire State Building",
                "A 102-story skyscraper located in Midtown Manhattan.",
            )),
        City::new(
            CityId::new(2),
            "Antwerp",
            "The one with the cathedral that was never really finished.",
        )
        .with_point_of_interest(PointOfInterest::new(
            PointOfInterestId::new(3),
            "Cathedral of Our Lady",
            "A Gothic style cathedral, conceived by architects Jan and Pieter Appelmans.",
        ))
        .with_point_of_interest(PointOfInterest::new(
            PointOfInterestId::new(4),
            "Antwerp Central Station",
            "The finest example of railway architecture in Belgium.",
        )),
        City::new(CityId::new(3), "Paris", "The one with that big tower.")
            .with_point_of_interest(PointOfInterest::new(
                PointOfInterestId::new(5),
                "Eiffel Tower",
                "A wrought iron lattice tower on the Champ de Mars, named after engineer Gustave Eiffel.",
            ))
            .with_point_of_interest(PointOfInterest::new(
                PointOfInterestId::new(6),
                "The Louvre",
                "The world's largest museum.",
            )),
    ]
}

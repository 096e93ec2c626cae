//! The bundled Japan catalog: nine regions and the vibe set the trip builder
//! offers. Editorial order matters: region order is the default display
//! order and the first city of each region is its representative for
//! auto-selection.

use crate::models::region::{City, Region};
use crate::models::vibe::Vibe;

use super::Catalog;

fn region(
    id: &str,
    name: &str,
    tagline: &str,
    description: &str,
    cities: &[(&str, &str)],
    best_for: &[&str],
    highlights: &[&str],
) -> Region {
    Region {
        id: id.to_string(),
        name: name.to_string(),
        tagline: tagline.to_string(),
        description: description.to_string(),
        cities: cities.iter().map(|(id, name)| City::new(id, name)).collect(),
        best_for: best_for.iter().map(|s| s.to_string()).collect(),
        highlights: highlights.iter().map(|s| s.to_string()).collect(),
        hero_image: Some(format!("regions/{}.jpg", id)),
        gallery: Vec::new(),
    }
}

pub(super) fn build() -> Catalog {
    Catalog {
        regions: vec![
            region(
                "hokkaido",
                "Hokkaido",
                "Wild north of powder snow and seafood",
                "Japan's northern island: volcanic national parks, lavender \
                 fields, ski resorts and the country's best uni and crab.",
                &[
                    ("sapporo", "Sapporo"),
                    ("otaru", "Otaru"),
                    ("furano", "Furano"),
                    ("hakodate", "Hakodate"),
                ],
                &["nature_escape", "snow_country", "foodie_paradise"],
                &["Niseko powder", "Sapporo beer garden", "Otaru canal"],
            ),
            region(
                "tohoku",
                "Tohoku",
                "Remote onsen towns and samurai history",
                "The quiet northeast: mountain temples, summer festivals and \
                 snow-buried hot-spring villages far from the crowds.",
                &[
                    ("sendai", "Sendai"),
                    ("aomori", "Aomori"),
                    ("yamagata", "Yamagata"),
                ],
                &["nature_escape", "onsen_retreat", "snow_country"],
                &["Yamadera temple steps", "Nyuto onsen", "Nebuta festival"],
            ),
            region(
                "kanto",
                "Kanto",
                "Tokyo and everything orbiting it",
                "The capital region: neon districts, pop-culture meccas, and \
                 day trips to Kamakura's coast and Nikko's shrines.",
                &[
                    ("tokyo", "Tokyo"),
                    ("yokohama", "Yokohama"),
                    ("kamakura", "Kamakura"),
                    ("nikko", "Nikko"),
                ],
                &["neon_city", "pop_culture"],
                &["Shibuya crossing", "Akihabara", "Great Buddha of Kamakura"],
            ),
            region(
                "chubu",
                "Chubu",
                "The Japan Alps and preserved post towns",
                "Central highlands between Tokyo and Kyoto: alpine hiking, \
                 thatched villages, castle towns and sake country.",
                &[
                    ("kanazawa", "Kanazawa"),
                    ("takayama", "Takayama"),
                    ("matsumoto", "Matsumoto"),
                    ("nagoya", "Nagoya"),
                ],
                &["nature_escape", "temples_tradition", "snow_country"],
                &["Kenroku-en garden", "Shirakawa-go", "Matsumoto castle"],
            ),
            region(
                "kansai",
                "Kansai",
                "Temples, street food and old Japan",
                "The cultural heartland: Kyoto's two thousand temples, \
                 Osaka's kitchen-counter food culture, Nara's deer park.",
                &[
                    ("kyoto", "Kyoto"),
                    ("osaka", "Osaka"),
                    ("nara", "Nara"),
                    ("kobe", "Kobe"),
                ],
                &["temples_tradition", "foodie_paradise", "pop_culture"],
                &["Fushimi Inari", "Dotonbori", "Todai-ji"],
            ),
            region(
                "chugoku",
                "Chugoku",
                "Shrines over water and inland-sea views",
                "The western arm of Honshu: Miyajima's floating torii, \
                 Hiroshima's peace park, sand dunes and island ferries.",
                &[
                    ("hiroshima", "Hiroshima"),
                    ("okayama", "Okayama"),
                    ("tottori", "Tottori"),
                ],
                &["temples_tradition", "island_coast"],
                &["Itsukushima shrine", "Peace Memorial Park", "Tottori dunes"],
            ),
            region(
                "shikoku",
                "Shikoku",
                "Pilgrim paths and Japan's oldest bath",
                "The smallest main island: the 88-temple pilgrimage, gorge \
                 rafting, udon country and Dogo onsen.",
                &[
                    ("matsuyama", "Matsuyama"),
                    ("takamatsu", "Takamatsu"),
                    ("kochi", "Kochi"),
                ],
                &["island_coast", "nature_escape", "onsen_retreat"],
                &["Dogo onsen", "Iya valley", "Ritsurin garden"],
            ),
            region(
                "kyushu",
                "Kyushu",
                "Volcanoes, ramen and steaming hot springs",
                "The southern island: Beppu's hell ponds, Fukuoka's yatai \
                 stalls, active calderas and onsen in every town.",
                &[
                    ("fukuoka", "Fukuoka"),
                    ("nagasaki", "Nagasaki"),
                    ("kumamoto", "Kumamoto"),
                    ("kagoshima", "Kagoshima"),
                ],
                &["onsen_retreat", "foodie_paradise", "island_coast"],
                &["Beppu hells", "Yatai food stalls", "Sakurajima"],
            ),
            region(
                "okinawa",
                "Okinawa",
                "Subtropical islands and Ryukyu culture",
                "Japan's far south: coral reefs, island-hopping ferries, \
                 a distinct cuisine and the slowest pace in the country.",
                &[("naha", "Naha"), ("ishigaki", "Ishigaki")],
                &["island_coast", "nature_escape"],
                &["Kerama islands", "Shuri castle", "Kabira bay"],
            ),
        ],
        vibes: vec![
            Vibe::new(
                "temples_tradition",
                "Temples & Tradition",
                "Shrines, tea houses, gardens and old streets",
                "torii",
            ),
            Vibe::new(
                "foodie_paradise",
                "Foodie Paradise",
                "Markets, counter seats and regional specialties",
                "ramen",
            ),
            Vibe::new(
                "nature_escape",
                "Nature Escape",
                "Mountains, forests, coastlines and national parks",
                "mountain",
            ),
            Vibe::new(
                "neon_city",
                "Neon City",
                "Big-city energy, nightlife and skyline views",
                "neon",
            ),
            Vibe::new(
                "onsen_retreat",
                "Onsen Retreat",
                "Hot-spring towns and ryokan slow travel",
                "onsen",
            ),
            Vibe::new(
                "pop_culture",
                "Pop Culture",
                "Anime, gaming, fashion and themed cafes",
                "gamepad",
            ),
            Vibe::new(
                "island_coast",
                "Islands & Coast",
                "Ferries, beaches and inland-sea villages",
                "wave",
            ),
            Vibe::new(
                "snow_country",
                "Snow Country",
                "Powder skiing and winter festivals",
                "snowflake",
            ),
        ],
    }
}

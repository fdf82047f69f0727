//! Review-page registry
//!
//! Some reviews get a bespoke long-form section beyond the generic layout.
//! The mapping from review id to its section renderer is a static table
//! resolved at compile time; ids without an entry fall back to the generic
//! review page.

use crate::data::Review;

/// Renderer for a review's bespoke section, returning HTML
pub type SectionRenderer = fn(&Review) -> String;

/// id → renderer table. Keep sorted by id.
const SECTIONS: &[(&str, SectionRenderer)] = &[
    ("nurture", nurture_section),
    ("yakuza-like-a-dragon", yakuza_section),
];

/// Look up the bespoke section renderer for a review id
pub fn review_section(id: &str) -> Option<SectionRenderer> {
    SECTIONS
        .iter()
        .find(|(key, _)| *key == id)
        .map(|(_, render)| *render)
}

struct Track {
    title: &'static str,
    description: &'static str,
}

fn nurture_section(review: &Review) -> String {
    let tracks = [
        Track {
            title: "Look at the Sky",
            description: "An uplifting anthem about hope and perseverance",
        },
        Track {
            title: "Something Comforting",
            description: "A perfect blend of electronic and organic elements",
        },
        Track {
            title: "Mirror",
            description: "An introspective journey with powerful vocals",
        },
    ];

    let mut html = String::new();
    html.push_str("<section class=\"review-section\"><h3>Introduction</h3>");
    html.push_str(
        "<p>Released in 2021, Nurture marks Porter Robinson's triumphant return \
         after a seven-year hiatus. This album represents a dramatic shift from \
         his previous work, incorporating more organic sounds, personal lyrics, \
         and a rawer emotional core.</p></section>",
    );

    html.push_str("<section class=\"review-section\"><h3>Standout Tracks</h3>");
    for track in &tracks {
        html.push_str(&format!(
            "<div class=\"track\"><h4>{}</h4><p>{}</p></div>",
            track.title, track.description
        ));
    }
    html.push_str("</section>");

    html.push_str(&format!(
        "<section class=\"review-section\"><h3>Overall Impression</h3><p>{}</p></section>",
        review.description
    ));

    html
}

fn yakuza_section(review: &Review) -> String {
    let mut html = String::new();
    html.push_str("<section class=\"review-section\"><h3>A New Direction</h3>");
    html.push_str(
        "<p>Ichiban Kasuga's journey from the bottom of Yokohama's underworld is \
         told with the series' trademark sincerity, and the switch to turn-based \
         combat gives every street brawl the melodrama of a classic RPG.</p></section>",
    );

    html.push_str(&format!(
        "<section class=\"review-section\"><h3>Overall Impression</h3><p>{}</p></section>",
        review.description
    ));

    html
}

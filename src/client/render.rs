//! Turns an itinerary into something a person can read.

use std::fmt::Write;

use crate::models::itinerary::{DayPlan, Itinerary};

/// HTML fragment for the output panel. All generated text is escaped.
pub fn render_html(trip: &Itinerary) -> String {
    let mut html = String::new();

    let _ = write!(
        html,
        r#"<div class="glass p-6 rounded-2xl">
  <h2 class="text-white font-bold text-2xl mb-2">Trip Summary</h2>
  <p class="text-blue-100">{}</p>
  <p class="text-blue-200 font-semibold mt-2">Estimated Cost: ₹{}</p>
</div>
"#,
        escape(&trip.summary),
        trip.total_cost
    );

    if !trip.hotels.is_empty() {
        html.push_str(&section_open("Hotel Options"));
        html.push_str("  <ol>\n");
        for hotel in &trip.hotels {
            let _ = writeln!(
                html,
                "    <li><strong>{}</strong> - ₹{}/night - {} \
                 (rating {:.1}, {} from center)</li>",
                escape(&hotel.name),
                hotel.price_per_night,
                escape(&hotel.description),
                hotel.rating,
                escape(&hotel.distance_from_center)
            );
        }
        html.push_str("  </ol>\n</div>\n");
    }

    html.push_str(&section_open("Day by Day Itinerary"));
    for day in &trip.itinerary {
        let _ = writeln!(
            html,
            "  <pre class=\"text-blue-100 whitespace-pre-wrap\">{}</pre>",
            escape(&day_block(day))
        );
    }
    html.push_str("</div>\n");

    html
}

/// Plain-text rendering for terminals.
pub fn render_text(trip: &Itinerary) -> String {
    let mut text = String::new();

    let _ = writeln!(
        text,
        "Trip Summary\n{}\nEstimated Cost: ₹{}",
        trip.summary, trip.total_cost
    );

    if !trip.hotels.is_empty() {
        text.push_str("\nHotel Options\n");
        for (i, hotel) in trip.hotels.iter().enumerate() {
            let _ = writeln!(
                text,
                "{}. {} - ₹{}/night - {} (rating {:.1}, {} from center)",
                i + 1,
                hotel.name,
                hotel.price_per_night,
                hotel.description,
                hotel.rating,
                hotel.distance_from_center
            );
        }
    }

    text.push_str("\nDay by Day Itinerary\n");
    for day in &trip.itinerary {
        let _ = writeln!(text, "{}", day_block(day));
    }

    text
}

fn day_block(day: &DayPlan) -> String {
    format!(
        "Day {} (₹{})\n  \
         Morning: {} - ₹{}\n  \
         Afternoon: {} - ₹{}\n  \
         Evening: {} - ₹{}\n  \
         Dining: {} ({}) - ₹{}\n  \
         Hotel: {} - ₹{}",
        day.day,
        day.daily_cost,
        day.morning.activity,
        day.morning.cost,
        day.afternoon.activity,
        day.afternoon.cost,
        day.evening.activity,
        day.evening.cost,
        day.dining.restaurant,
        day.dining.cuisine,
        day.dining.cost,
        day.hotel.name,
        day.hotel.price
    )
}

fn section_open(title: &str) -> String {
    format!(
        "<div class=\"glass p-6 rounded-2xl mt-4\">\n  \
         <h2 class=\"text-white font-bold text-2xl mb-2\">{}</h2>\n",
        title
    )
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::template_itinerary::synthesize;

    #[test]
    fn test_html_has_one_block_per_day() {
        let trip = synthesize("Paris", 5000, 5);
        let html = render_html(&trip);

        assert_eq!(html.matches("<pre ").count(), 5);
        assert_eq!(html.matches("<li>").count(), 3);
        assert!(html.contains("Estimated Cost: ₹5000"));
        assert!(html.contains("Day 5 (₹1000)"));
    }

    #[test]
    fn test_html_escapes_generated_text() {
        let mut trip = synthesize("Paris", 1000, 1);
        trip.summary = "<script>alert('x')</script> & more".to_string();
        let html = render_html(&trip);

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt; &amp; more"));
    }

    #[test]
    fn test_text_lists_every_slot() {
        let trip = synthesize("Rome", 2000, 2);
        let text = render_text(&trip);

        assert!(text.starts_with("Trip Summary\n"));
        assert_eq!(text.matches("Morning:").count(), 2);
        assert_eq!(text.matches("Hotel:").count(), 2);
        assert!(text.contains("1. Rome Comfort Inn - ₹500/night"));
    }
}

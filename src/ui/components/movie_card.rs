use dioxus::prelude::*;

/// Individual movie card component
#[component]
pub fn MovieCard(id: i64, name: String, description: String, rating: Option<f64>) -> Element {
    rsx! {
        div { class: "bg-gray-800 rounded-lg overflow-hidden shadow-lg hover:shadow-xl transition-shadow duration-300 p-4",
            h3 { class: "font-bold text-lg text-white mb-2", "{name}" }
            p { class: "text-gray-400 text-sm mb-3", "{description}" }
            if let Some(rating) = rating {
                p { class: "text-yellow-400 text-sm font-medium", "Rated {rating:.1} / 5" }
            }
        }
    }
}

//! Vistas HTML
//!
//! Páginas renderizadas en el servidor: listado de vehículos con sus acciones
//! y página de privacidad. Todo texto dinámico pasa por `escape_html`.

use crate::dto::vehicle_dto::VehicleResponse;
use crate::factories::VehicleVariant;

const STYLE: &str = "body{font-family:sans-serif;margin:2rem}\
table{border-collapse:collapse}td,th{border:1px solid #ccc;padding:.4rem .8rem}\
.error{background:#fdd;border:1px solid #c00;padding:.6rem;margin-bottom:1rem}";

pub fn escape_html(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

fn layout(title: &str, body: &str) -> String {
    format!(
        "<!doctype html><html><head><meta charset=\"utf-8\"><title>{}</title>\
<style>{}</style></head><body>\
<nav><a href=\"/\">Vehicles</a> | <a href=\"/privacy\">Privacy</a></nav>{}</body></html>",
        escape_html(title),
        STYLE,
        body
    )
}

fn vehicle_row(vehicle: &VehicleResponse) -> String {
    let id = urlencoding::encode(&vehicle.id);
    format!(
        "<tr><td><code>{}</code></td><td>{} {}</td><td>{}</td><td>{}</td>\
<td>{} ({} HP)</td><td>{}</td><td>{} years</td><td>{:.1} / {:.1}</td><td>{}</td>\
<td><a href=\"/start-engine?id={id}\">Start</a> \
<a href=\"/stop-engine?id={id}\">Stop</a> \
<a href=\"/add-gas?id={id}\">Add gas</a></td></tr>",
        escape_html(&vehicle.id),
        escape_html(&vehicle.brand),
        escape_html(&vehicle.model),
        escape_html(&vehicle.color),
        vehicle.year,
        escape_html(&vehicle.engine_type),
        vehicle.horsepower,
        escape_html(&vehicle.transmission),
        vehicle.warranty_years,
        vehicle.fuel_level,
        vehicle.fuel_capacity,
        if vehicle.engine_running { "Running" } else { "Stopped" },
        id = id,
    )
}

/// Página principal con el listado y el mensaje de error opcional
pub fn render_home(vehicles: &[VehicleResponse], error: Option<&str>) -> String {
    let mut body = String::from("<h1>Vehicles</h1>");

    if let Some(message) = error.filter(|m| !m.trim().is_empty()) {
        body.push_str(&format!("<div class=\"error\">{}</div>", escape_html(message)));
    }

    body.push_str("<p>");
    for variant in VehicleVariant::ALL {
        body.push_str(&format!(
            "<a href=\"/add-{}\">Add Ford {}</a> ",
            variant.slug(),
            capitalize(variant.slug())
        ));
    }
    body.push_str("</p>");

    if vehicles.is_empty() {
        body.push_str("<p>No vehicles yet.</p>");
    } else {
        body.push_str(
            "<table><tr><th>Id</th><th>Vehicle</th><th>Color</th><th>Year</th><th>Engine</th>\
<th>Transmission</th><th>Warranty</th><th>Fuel</th><th>Status</th><th>Actions</th></tr>",
        );
        for vehicle in vehicles {
            body.push_str(&vehicle_row(vehicle));
        }
        body.push_str("</table>");
    }

    layout("Vehicles", &body)
}

pub fn render_privacy() -> String {
    layout(
        "Privacy",
        "<h1>Privacy Policy</h1><p>This catalog keeps vehicles in memory only. \
Nothing is stored after the server stops and no personal data is collected.</p>",
    )
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html("<script>alert('x') & \"y\"</script>"),
            "&lt;script&gt;alert(&#39;x&#39;) &amp; &quot;y&quot;&lt;/script&gt;"
        );
    }

    #[test]
    fn test_home_shows_error_and_empty_state() {
        let html = render_home(&[], Some("Vehicle with id 'x' not found"));
        assert!(html.contains("<div class=\"error\">Vehicle with id &#39;x&#39; not found</div>"));
        assert!(html.contains("No vehicles yet."));
        assert!(html.contains("href=\"/add-escape\""));
        assert!(html.contains("Add Ford Explorer"));
    }

    #[test]
    fn test_home_lists_vehicles_with_actions() {
        let vehicle = VehicleResponse::from(VehicleVariant::Escape.create());
        let html = render_home(std::slice::from_ref(&vehicle), None);

        assert!(html.contains("Ford Escape"));
        assert!(html.contains("I4 Turbo (250 HP)"));
        assert!(html.contains(&format!("/start-engine?id={}", vehicle.id)));
        assert!(!html.contains("class=\"error\""));
    }
}

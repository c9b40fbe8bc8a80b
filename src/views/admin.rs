use crate::models::travel::Travel;

use super::{escape, layout};

fn travel_row(travel: &Travel) -> String {
    // El botón de editar lleva el viaje completo en JSON para rellenar el formulario
    let json = serde_json::to_string(travel).unwrap_or_else(|_| "{}".to_string());

    format!(
        "<tr>\
<td><a href=\"{ruta}\">{ruta}</a></td>\
<td>{lugar}</td>\
<td>{nombre}</td>\
<td>{precio}</td>\
<td>\
<button type=\"button\" data-travel=\"{json}\" onclick=\"editTravel(this.dataset.travel)\">Editar</button> \
<button type=\"button\" data-id=\"{id}\" onclick=\"deleteTravel(this.dataset.id)\">Borrar</button>\
</td>\
</tr>\n",
        ruta = escape(&travel.ruta),
        lugar = escape(&travel.lugar),
        nombre = escape(&travel.nombre),
        precio = escape(&travel.precio_label()),
        json = escape(&json),
        id = escape(&travel.id),
    )
}

fn travel_fields(prefix: &str) -> String {
    let fields = [
        ("ruta", "Ruta", "text"),
        ("nombre", "Nombre", "text"),
        ("descripcion", "Descripción", "text"),
        ("precio", "Precio", "number\" step=\"any"),
        ("lugar", "Lugar", "text"),
        ("img", "Imagen", "text"),
    ];

    fields
        .iter()
        .map(|(name, label, kind)| {
            let id = format!("{}{}", prefix, name);
            format!(
                "<label for=\"{id}\">{label}</label>\n<input type=\"{kind}\" id=\"{id}\" name=\"{id}\">\n",
                id = id,
                label = label,
                kind = kind,
            )
        })
        .collect()
}

/// Panel de administración: listado, alta, edición y borrado
pub fn render_admin(travels: &[Travel]) -> String {
    let rows: String = travels.iter().map(travel_row).collect();

    let body = format!(
        "<main class=\"admin\">\n\
<h1>Panel de administración</h1>\n\
<table>\n\
<thead><tr><th>Ruta</th><th>Lugar</th><th>Nombre</th><th>Precio</th><th></th></tr></thead>\n\
<tbody>\n{rows}</tbody>\n\
</table>\n\
<section id=\"insert\">\n\
<h2>Nuevo viaje</h2>\n\
<form id=\"dataInsert\" method=\"post\" action=\"/insert\">\n\
{insert_fields}<button type=\"submit\">Crear</button>\n\
</form>\n\
</section>\n\
<section id=\"update\">\n\
<h2>Editar viaje</h2>\n\
<form id=\"dataUpdate\">\n\
<input type=\"hidden\" id=\"update_id\" name=\"update_id\">\n\
{update_fields}<button type=\"submit\">Guardar</button>\n\
</form>\n\
</section>\n\
</main>",
        rows = rows,
        insert_fields = travel_fields(""),
        update_fields = travel_fields("update_"),
    );

    layout("Panel de administración", &body, &["/js/admin.js"])
}

use crate::models::travel::Travel;

use super::{escape, layout};

/// Página de un viaje con la navegación a todos los demás
pub fn render_travel(travel: &Travel, travels: &[Travel]) -> String {
    let nav: String = travels
        .iter()
        .map(|t| {
            let class = if t.id == travel.id { " class=\"active\"" } else { "" };
            format!(
                "<li{class}><a href=\"{ruta}\">{lugar}</a></li>\n",
                class = class,
                ruta = escape(&t.ruta),
                lugar = escape(&t.lugar),
            )
        })
        .collect();

    let body = format!(
        "<nav>\n<ul>\n{nav}</ul>\n</nav>\n\
<main class=\"travel\" data-id=\"{id}\">\n\
<h1>{lugar}</h1>\n\
<h2>{nombre}</h2>\n\
<img src=\"{img}\" alt=\"{lugar}\">\n\
<p>{descripcion}</p>\n\
<p class=\"precio\">{precio} €</p>\n\
</main>",
        nav = nav,
        id = escape(&travel.id),
        lugar = escape(&travel.lugar),
        nombre = escape(&travel.nombre),
        img = escape(&travel.img),
        descripcion = escape(&travel.descripcion),
        precio = escape(&travel.precio_label()),
    );

    layout(&travel.lugar, &body, &[])
}

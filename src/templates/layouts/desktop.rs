use maud::{html, Markup, PreEscaped, DOCTYPE};

const STYLES: &str = r#"
body { font-family: system-ui, sans-serif; margin: 0; color: #2b2b2b; }
header { display: flex; align-items: center; gap: 1rem; padding: 0.75rem 1.5rem; box-shadow: 0 1px 3px rgba(0,0,0,0.1); }
header a { text-decoration: none; color: inherit; }
.container { max-width: 1100px; margin: 2rem auto; padding: 0 1rem; }
.sort a { margin-right: 0.75rem; }
.sort a.active { font-weight: 600; }
.shoe-grid { display: flex; flex-wrap: wrap; gap: 32px; }
.shoe-card-link { text-decoration: none; color: inherit; flex: 1 1 344px; }
.shoe-card { display: flex; flex-direction: column; height: 370px; margin-bottom: 32px; padding-right: 4px; }
.shoe-card__image { position: relative; background-color: #f3f3f3; border-radius: 16px 16px 4px 4px; flex: 1; }
.shoe-card__image img { width: 100%; border-radius: 16px; }
.shoe-card__row { display: flex; font-size: 1rem; }
.shoe-card__name { font-weight: 500; color: #222; }
.shoe-card__colors { color: #606060; }
.price { margin-left: auto; }
.price--struck { text-decoration: line-through; color: #606060; }
.sale-price { margin-left: auto; font-weight: 500; color: #c5295f; }
.badge { position: absolute; top: 12px; right: -4px; height: 32px; padding: 0 10px; display: flex; align-items: center; border-radius: 2px; color: #fff; font-size: 0.875rem; font-weight: 500; }
.badge--sale { background-color: #c5295f; }
.badge--new { background-color: #6868d9; }
"#;

pub fn desktop_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (PreEscaped(STYLES)) }
            }
            body {
                header {
                    a href="/" { h3 { "Sole & Ankh" } }
                    nav {
                        a href="/?sort=newest" { "New Releases" }
                    }
                }
                (content)
            }
        }
    }
}

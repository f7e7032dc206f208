//! Server-side HTML for the landing page.
//!
//! The calculator is plain HTML: every size card is a link and the sheet
//! slider sits in a GET form, so each interaction reloads the page with a
//! fresh quote. No client-side script is needed.

use maud::{html, Markup, PreEscaped, DOCTYPE};

use crate::pricing::catalog::{
    catalog, SizeOption, BASE_INCLUDED_PHOTOS, MAX_SHEETS, MIN_SHEETS, PHOTOS_PER_SHEET,
    SHEET_STEP,
};
use crate::pricing::{format_amount, SelectionState};

const PREVIEW_PX_PER_INCH: u32 = 8;
const PREVIEW_MAX_HEIGHT: u32 = 90;
const MID_SHEETS: i64 = (MIN_SHEETS + MAX_SHEETS + 1) / 2;
const HERO_IMAGE: &str = "https://images.unsplash.com/photo-1519741497674-611481863552?q=80&w=2070&auto=format&fit=crop";

/// Everything the page needs besides the selection itself.
pub struct PageContext<'a> {
    pub studio_name: &'a str,
    pub order_url: &'a str,
    pub year: i32,
}

const FEATURES: [(&str, &str); 3] = [
    (
        "Apertura Layflat 180°",
        "Nuestras páginas se abren completamente planas, permitiendo que tus fotos panorámicas luzcan espectaculares.",
    ),
    (
        "Papel Fine Art",
        "Impresión en papel especial, calidad de archivo y laminado. Colores vibrantes y negros profundos que duran generaciones.",
    ),
    (
        "Acabados Premium",
        "Portadas personalizadas, estudio o fotográficas. Cada detalle es revisado manualmente por nuestro personal.",
    ),
];

const STYLES: &str = r#"
body{margin:0;font-family:system-ui,sans-serif;background:#0f172a;color:#cbd5e1}
a{color:inherit;text-decoration:none}
nav{display:flex;justify-content:space-between;align-items:center;padding:24px 48px}
.brand{font-size:1.5rem;font-weight:700;letter-spacing:.2em;color:#fff}
.pill{padding:8px 24px;border:1px solid #ffffff33;border-radius:999px}
header{position:relative;min-height:70vh;display:flex;align-items:center;justify-content:center;text-align:center;overflow:hidden}
header img{position:absolute;inset:0;width:100%;height:100%;object-fit:cover;opacity:.4}
header .hero{position:relative;max-width:48rem;padding:0 16px}
.eyebrow{color:#f59e0b;letter-spacing:.2em;text-transform:uppercase;font-weight:700;font-size:.8rem}
h1{font-size:3.5rem;color:#fff;margin:16px 0}
h1 em{color:#fbbf24}
.cta{display:inline-block;padding:16px 32px;background:#d97706;color:#fff;border-radius:999px;font-weight:600}
.features{display:grid;grid-template-columns:repeat(3,1fr);gap:48px;max-width:72rem;margin:0 auto;padding:96px 24px}
.feature{padding:24px;border:1px solid #ffffff0d;border-radius:16px;background:#ffffff0d;text-align:center}
.feature h3{color:#fff}
#calculator{background:#020617;padding:96px 16px}
.calc{display:flex;gap:64px;max-width:72rem;margin:0 auto;flex-wrap:wrap}
.controls{flex:3;min-width:20rem}
.summary{flex:2;min-width:18rem;background:#0f172a;border:1px solid #1e293b;border-radius:24px;padding:32px;align-self:flex-start}
.step{color:#f59e0b;font-weight:700;text-transform:uppercase;font-size:.8rem}
.sizes{display:grid;grid-template-columns:repeat(3,1fr);gap:16px}
.size{position:relative;display:flex;flex-direction:column;align-items:center;gap:16px;padding:24px;border:2px solid #334155;border-radius:12px;background:#1e293b80}
.size.active{border-color:#f59e0b;background:#f59e0b1a;color:#fff}
.size .book{border-radius:2px 6px 6px 2px;border-left:4px solid #64748b;background:#e2e8f00d;box-shadow:2px 4px 10px #0000004d}
.size.active .book{border-left-color:#f59e0b}
.size .check{position:absolute;top:12px;right:12px;color:#f59e0b}
.track{height:12px;background:#1e293b;border-radius:999px;overflow:hidden}
.fill{height:100%;background:linear-gradient(90deg,#92400e,#f59e0b)}
.bubble{display:inline-block;background:#f59e0b;color:#0f172a;font-weight:700;font-size:.85rem;padding:4px 12px;border-radius:8px}
input[type=range]{width:100%}
.ticks{display:flex;justify-content:space-between;font-size:.85rem;color:#64748b}
.line{display:flex;justify-content:space-between;margin:12px 0}
.total{display:flex;justify-content:space-between;align-items:center;background:#1e293b80;padding:16px;border-radius:12px;border:1px solid #334155;margin:32px 0}
.total strong{font-size:2.25rem;color:#f59e0b}
.order{display:block;text-align:center;background:#25d366;color:#fff;font-weight:700;padding:16px;border-radius:12px}
.fine{font-size:.75rem;color:#64748b;text-align:center}
footer{display:flex;justify-content:space-between;align-items:center;padding:48px;border-top:1px solid #0f172a;background:#020617}
"#;

/// Link that reloads the page with `size` selected, keeping the sheet count.
fn size_href(size: &SizeOption, selection: &SelectionState) -> String {
    format!(
        "/?size={}&sheets={}#calculator",
        size.id,
        selection.sheet_count()
    )
}

fn render_size_card(size: &SizeOption, selection: &SelectionState) -> Markup {
    let active = size.id == selection.size_id();
    let (width, height) = size.preview_px(PREVIEW_PX_PER_INCH, PREVIEW_MAX_HEIGHT);
    html! {
        a class=(if active { "size active" } else { "size" })
            href=(size_href(size, selection))
            aria-current=[active.then_some("true")] {
            div class="book" style={ "width:" (width) "px;height:" (height) "px" } {}
            span { (size.label) }
            @if active {
                span class="check" { "✓" }
            }
        }
    }
}

fn render_calculator(selection: &SelectionState, ctx: &PageContext<'_>) -> Markup {
    let size = selection.size();
    let quote = selection.quote();
    let sheets = selection.sheet_count();
    let percent = format!("{:.0}", selection.slider_percent());

    html! {
        section id="calculator" {
            div class="calc" {
                div class="controls" {
                    h2 { "Cotiza tu PhotoBook" }
                    p { "Personaliza las dimensiones y la cantidad de páginas para obtener un precio instantáneo." }

                    p class="step" { "1. Elige el tamaño (Pulgadas)" }
                    div class="sizes" {
                        @for option in catalog() {
                            (render_size_card(option, selection))
                        }
                    }

                    p class="step" { "2. Cantidad de Hojas Adicionales" }
                    p class="fine" { "Nota: Una Hoja = 1 Página = " (PHOTOS_PER_SHEET) " Fotos" }
                    form method="get" action="/#calculator" {
                        input type="hidden" name="size" value=(size.id);
                        span class="bubble" { (sheets) " Hojas" }
                        div class="track" {
                            div class="fill" style={ "width:" (percent) "%" } {}
                        }
                        input type="range" name="sheets" min=(MIN_SHEETS) max=(MAX_SHEETS)
                            step=(SHEET_STEP) value=(sheets) aria-label="Cantidad de hojas";
                        div class="ticks" {
                            span { (MIN_SHEETS) " hojas" }
                            span { (MID_SHEETS) " hojas" }
                            span { (MAX_SHEETS) " hojas" }
                        }
                        button class="pill" type="submit" { "Actualizar" }
                    }
                }

                div class="summary" {
                    h3 { "Resumen del Pedido" }
                    div class="line" {
                        span { "Modelo" }
                        span { (size.label) " Premium" }
                    }
                    div class="line" {
                        span { "Precio Base (" (BASE_INCLUDED_PHOTOS) " Fotos)" }
                        span { "$" (format_amount(quote.base_price)) }
                    }
                    div class="line" {
                        span { "Hojas Adicionales (" (sheets) ")" }
                        span { "$" (format_amount(quote.sheets_cost)) }
                    }
                    div class="total" {
                        span { "Total Estimado" }
                        strong { "$" (format_amount(quote.total)) }
                    }
                    a class="order" href=(ctx.order_url) target="_blank" rel="noopener" {
                        "Ordenar por WhatsApp"
                    }
                    p class="fine" { "*El precio final puede variar según materiales de portada extra o envío." }
                }
            }
        }
    }
}

/// Renders the full landing page for one selection.
pub fn render_landing(selection: &SelectionState, ctx: &PageContext<'_>) -> Markup {
    let brand = ctx.studio_name.to_uppercase();

    html! {
        (DOCTYPE)
        html lang="es" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (ctx.studio_name) " · PhotoBooks" }
                style { (PreEscaped(STYLES)) }
            }
            body {
                nav {
                    span class="brand" { (brand) }
                    a class="pill" href="#calculator" { "Cotizar Ahora" }
                }
                header {
                    img src=(HERO_IMAGE) alt="Wedding Photobook";
                    div class="hero" {
                        span class="eyebrow" { "Impresión Profesional de Fotografía" }
                        h1 { "Tus recuerdos merecen " br; em { "ser eternos." } }
                        p { "Diseñamos PhotoBooks de calidad de museo. Impresión fine-art, encuadernación artesanal y acabados de lujo para tus momentos más preciados." }
                        a class="cta" href="#calculator" { "Diseña tu Álbum" }
                    }
                }
                section class="features" {
                    @for (title, text) in FEATURES {
                        div class="feature" {
                            h3 { (title) }
                            p { (text) }
                        }
                    }
                }
                (render_calculator(selection, ctx))
                footer {
                    span class="brand" { (brand) }
                    p { "© " (ctx.year) " " (ctx.studio_name) ". Todos los derechos reservados." }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx() -> PageContext<'static> {
        PageContext {
            studio_name: "Cerimagen",
            order_url: "https://wa.me/5351110501?text=a&b",
            year: 2026,
        }
    }

    fn page(selection: &SelectionState) -> String {
        render_landing(selection, &ctx()).into_string()
    }

    #[test]
    fn test_default_page_shows_scenario_a() {
        let html = page(&SelectionState::default());
        assert!(html.contains("8 x 10&quot; Premium"));
        assert!(html.contains("Hojas Adicionales (20)"));
        assert!(html.contains("$25.00"));
        assert!(html.contains("$60.00"));
        assert!(html.contains("<strong>$85.00</strong>"));
    }

    #[test]
    fn test_every_size_has_a_card_and_one_is_active() {
        let selection = SelectionState::from_params(Some("6x8"), Some(10));
        let html = page(&selection);
        for size in catalog() {
            let href = size_href(size, &selection).replace('&', "&amp;");
            assert!(html.contains(&href), "missing card for {}", size.id);
        }
        assert_eq!(html.matches(r#"class="size active""#).count(), 1);
        assert_eq!(html.matches(r#"aria-current="true""#).count(), 1);
        assert!(html.contains("/?size=6x8&amp;sheets=10#calculator"));
    }

    #[test]
    fn test_slider_reflects_selection() {
        let selection = SelectionState::from_params(Some("5x7"), Some(12));
        let html = page(&selection);
        assert!(html.contains(r#"value="12""#));
        assert!(html.contains("width:50%"));
        assert!(html.contains(r#"min="0" max="24" step="2""#));
    }

    #[test]
    fn test_tick_labels_fixed_and_count_shown_separately() {
        let selection = SelectionState::from_params(None, Some(4));
        let html = page(&selection);
        assert!(html.contains("<span>0 hojas</span><span>12 hojas</span><span>24 hojas</span>"));
        assert!(html.contains(r#"<span class="bubble">4 Hojas</span>"#));
    }

    #[test]
    fn test_text_is_escaped() {
        let ctx = PageContext {
            studio_name: "<Foto & Co>",
            order_url: "https://wa.me/1",
            year: 2026,
        };
        let html = render_landing(&SelectionState::default(), &ctx).into_string();
        assert!(html.contains("&lt;Foto &amp; Co&gt;"));
        assert!(!html.contains("<Foto"));
    }

    #[test]
    fn test_order_link_escaped_and_opens_new_context() {
        let html = page(&SelectionState::default());
        assert!(html.contains(
            r#"href="https://wa.me/5351110501?text=a&amp;b" target="_blank""#
        ));
    }

    #[test]
    fn test_studio_name_in_footer() {
        let html = page(&SelectionState::default());
        assert!(html.contains("© 2026 Cerimagen."));
        assert!(html.contains("CERIMAGEN"));
    }
}

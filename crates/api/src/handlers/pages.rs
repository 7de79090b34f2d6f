//! Server-rendered listing pages.
//!
//! Two small pages over the same collection: `/` is a static listing and
//! `/realtimeproducts` additionally opens a WebSocket to `/ws` and patches
//! the list in place as `productAdded` / `productUpdated` events arrive.
//! The pages are small enough that the HTML is assembled by hand; all
//! product-sourced text goes through [`escape_html`].

use axum::extract::State;
use axum::response::Html;

use tienda_core::product::Product;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /
pub async fn home(State(state): State<AppState>) -> AppResult<Html<String>> {
    let products = state.store.list_all().await?;
    Ok(Html(render_page("Products", &products, false)))
}

/// GET /realtimeproducts
pub async fn realtime(State(state): State<AppState>) -> AppResult<Html<String>> {
    let products = state.store.list_all().await?;
    Ok(Html(render_page("Real-time products", &products, true)))
}

/// Escape text for interpolation into HTML element content or attributes.
fn escape_html(text: &str) -> String {
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

fn render_item(product: &Product) -> String {
    format!(
        "      <li data-id=\"{id}\"><strong>{title}</strong> — {description} (${price}, stock: {stock})</li>\n",
        id = product.id,
        title = escape_html(&product.title),
        description = escape_html(&product.description),
        price = product.price,
        stock = product.stock,
    )
}

fn render_page(title: &str, products: &[Product], live: bool) -> String {
    let mut page = String::new();

    page.push_str("<!DOCTYPE html>\n<html>\n  <head>\n");
    page.push_str(&format!(
        "    <meta charset=\"utf-8\">\n    <title>{}</title>\n",
        escape_html(title)
    ));
    page.push_str("  </head>\n  <body>\n");
    page.push_str(&format!("    <h1>{}</h1>\n", escape_html(title)));
    page.push_str("    <ul id=\"product-list\">\n");
    for product in products {
        page.push_str(&render_item(product));
    }
    page.push_str("    </ul>\n");

    if live {
        page.push_str(LIVE_SCRIPT);
    }

    page.push_str("  </body>\n</html>\n");
    page
}

/// Client-side subscription to the broadcast feed. Renders the same item
/// shape as [`render_item`]; updates replace the matching `data-id` entry.
const LIVE_SCRIPT: &str = r#"    <script>
      const list = document.getElementById("product-list");
      const scheme = location.protocol === "https:" ? "wss" : "ws";
      const socket = new WebSocket(`${scheme}://${location.host}/ws`);

      function renderItem(product) {
        const item = document.createElement("li");
        item.dataset.id = product.id;
        const name = document.createElement("strong");
        name.textContent = product.title;
        item.appendChild(name);
        item.appendChild(
          document.createTextNode(
            ` — ${product.description} ($${product.price}, stock: ${product.stock})`
          )
        );
        return item;
      }

      socket.onmessage = (msg) => {
        const { event, payload, error } = JSON.parse(msg.data);
        if (error) {
          console.error("Server error:", error);
          return;
        }
        if (event === "productAdded") {
          list.appendChild(renderItem(payload));
        } else if (event === "productUpdated") {
          const existing = list.querySelector(`li[data-id="${payload.id}"]`);
          if (existing) {
            existing.replaceWith(renderItem(payload));
          }
        }
      };
    </script>
"#;

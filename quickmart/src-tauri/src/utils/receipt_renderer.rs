//! Receipt renderer
//!
//! Renders an order into a self-contained printable HTML document with a
//! narrow fixed-width layout matching thermal-receipt proportions. All
//! order-derived text is escaped before it is composed into markup: the
//! document is handed to a webview, so nothing from the data model may be
//! interpreted as HTML.

use shared::i18n::Labels;
use shared::models::Order;

use crate::utils::price::format_usd;

const RECEIPT_STYLE: &str = r#"
      @media print {
        body { margin: 0; }
      }
      body {
        font-family: 'Courier New', monospace;
        max-width: 300px;
        margin: 20px auto;
        padding: 20px;
      }
      .header {
        text-align: center;
        margin-bottom: 20px;
        border-bottom: 2px dashed #000;
        padding-bottom: 10px;
      }
      .header h1 { margin: 0; font-size: 24px; }
      .header p { margin: 5px 0; font-size: 12px; }
      .order-info { margin-bottom: 15px; font-size: 12px; }
      .items { margin-bottom: 15px; }
      .item {
        display: flex;
        justify-content: space-between;
        margin-bottom: 5px;
        font-size: 12px;
      }
      .totals { border-top: 2px dashed #000; padding-top: 10px; margin-top: 10px; }
      .total-row {
        display: flex;
        justify-content: space-between;
        margin-bottom: 5px;
        font-size: 14px;
      }
      .total-row.grand {
        font-weight: bold;
        font-size: 16px;
        border-top: 1px solid #000;
        padding-top: 5px;
        margin-top: 5px;
      }
      .footer {
        text-align: center;
        margin-top: 20px;
        padding-top: 10px;
        border-top: 2px dashed #000;
        font-size: 10px;
      }
"#;

pub struct ReceiptRenderer<'a> {
    order: &'a Order,
    labels: &'static Labels,
}

impl<'a> ReceiptRenderer<'a> {
    pub fn new(order: &'a Order, labels: &'static Labels) -> Self {
        Self { order, labels }
    }

    pub fn render(&self) -> String {
        let order = self.order;
        let labels = self.labels;
        let short_id = short_id(&order.id);

        let mut items = String::new();
        for line in &order.items {
            items.push_str(&format!(
                "          <div class=\"item\">\n            <span>{}x {}</span>\n            <span>{}</span>\n          </div>\n",
                line.quantity,
                escape_html(&line.product.name),
                format_usd(line.line_total()),
            ));
        }

        // Pre-discount subtotal reconstructed from the stored total.
        let subtotal_row = format!(
            "          <div class=\"total-row\">\n            <span>{}</span>\n            <span>{}</span>\n          </div>\n",
            escape_html(labels.subtotal),
            format_usd(order.subtotal()),
        );

        let discount_row = match (order.discount, order.coupon_code.as_deref()) {
            (Some(discount), code) if discount > 0.0 => format!(
                "          <div class=\"total-row\" style=\"color: green;\">\n            <span>{} ({})</span>\n            <span>-{}</span>\n          </div>\n",
                escape_html(labels.discount),
                escape_html(code.unwrap_or("")),
                format_usd(discount),
            ),
            _ => String::new(),
        };

        format!(
            r#"<!DOCTYPE html>
<html>
  <head>
    <title>Receipt - Order #{short_id}</title>
    <style>{style}</style>
  </head>
  <body>
    <div class="header">
      <h1>{store_name}</h1>
      <p>{title}</p>
      <p>{thanks}</p>
    </div>

    <div class="order-info">
      <p><strong>{order_id_label}</strong> {short_id}</p>
      <p><strong>{date_label}</strong> {date}</p>
      <p><strong>{payment_label}</strong> {payment}</p>
    </div>

    <div class="items">
      <p style="margin-bottom: 10px;"><strong>{items_label}</strong></p>
{items}    </div>

    <div class="totals">
{subtotal_row}{discount_row}          <div class="total-row grand">
        <span>{total_label}</span>
        <span>{total}</span>
      </div>
    </div>

    <div class="footer">
      <p>{items_purchased_label} {item_count}</p>
      <p>---</p>
      <p>{footer_visit}</p>
      <p>{footer_tagline}</p>
    </div>
  </body>
</html>
"#,
            short_id = escape_html(short_id),
            style = RECEIPT_STYLE,
            store_name = escape_html(labels.store_name),
            title = escape_html(labels.receipt_title),
            thanks = escape_html(labels.receipt_thanks),
            order_id_label = escape_html(labels.order_id),
            date_label = escape_html(labels.date),
            date = order.date.format("%Y-%m-%d %H:%M:%S"),
            payment_label = escape_html(labels.payment),
            payment = escape_html(labels.payment_label(order.payment_method)),
            items_label = escape_html(labels.items),
            items = items,
            subtotal_row = subtotal_row,
            discount_row = discount_row,
            total_label = escape_html(labels.total),
            total = format_usd(order.total),
            items_purchased_label = escape_html(labels.items_purchased),
            item_count = order.item_count(),
            footer_visit = escape_html(labels.footer_visit),
            footer_tagline = escape_html(labels.footer_tagline),
        )
    }
}

/// First 8 characters of the order id (UUIDs are longer; short ids pass
/// through unchanged)
fn short_id(id: &str) -> &str {
    id.get(..8).unwrap_or(id)
}

/// Escape text for safe interpolation into the receipt markup
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

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use shared::i18n::{Labels, Language};
    use shared::models::{CartLine, PaymentMethod, Product};

    fn line(name: &str, price: f64, quantity: u32) -> CartLine {
        CartLine {
            product: Product {
                id: "p1".to_string(),
                name: name.to_string(),
                name_translations: None,
                price,
                category: "Misc".to_string(),
                image: String::new(),
                barcode: String::new(),
            },
            quantity,
        }
    }

    fn order(discount: Option<f64>, coupon_code: Option<&str>) -> Order {
        let items = vec![line("Fresh Apples", 3.99, 2), line("Organic Milk", 4.49, 1)];
        let subtotal: f64 = items.iter().map(CartLine::line_total).sum();
        Order {
            id: "5f2c9b1a-0000-4000-8000-000000000000".to_string(),
            items,
            total: (subtotal - discount.unwrap_or(0.0)).max(0.0),
            payment_method: PaymentMethod::Card,
            date: Utc::now(),
            discount,
            coupon_code: coupon_code.map(str::to_string),
        }
    }

    fn labels() -> &'static Labels {
        Labels::for_language(Language::En)
    }

    #[test]
    fn test_render_basic_receipt() {
        let order = order(None, None);
        let html = ReceiptRenderer::new(&order, labels()).render();

        assert!(html.contains("QuickMart"));
        // Shortened order id, not the full UUID.
        assert!(html.contains("5f2c9b1a"));
        assert!(!html.contains("5f2c9b1a-0000"));
        assert!(html.contains("2x Fresh Apples"));
        assert!(html.contains("$7.98"));
        assert!(html.contains("$12.47"));
    }

    #[test]
    fn test_subtotal_reconstructed_from_total_plus_discount() {
        let order = order(Some(2.0), Some("SAVE10"));
        let html = ReceiptRenderer::new(&order, labels()).render();

        // Subtotal is total + discount; both render with two decimals.
        assert!(html.contains(&format_usd(order.subtotal())));
        assert!(html.contains(&format_usd(order.total)));
        assert!(html.contains("-$2.00"));
        assert!(html.contains("SAVE10"));
    }

    #[test]
    fn test_discount_row_absent_without_coupon() {
        let order = order(None, None);
        let html = ReceiptRenderer::new(&order, labels()).render();
        assert!(!html.contains("color: green"));
    }

    #[test]
    fn test_item_count_in_footer() {
        let order = order(None, None);
        let html = ReceiptRenderer::new(&order, labels()).render();
        assert!(html.contains("Items Purchased: 3"));
    }

    #[test]
    fn test_localized_labels() {
        let order = order(None, None);
        let html = ReceiptRenderer::new(&order, Labels::for_language(Language::De)).render();
        assert!(html.contains("Zwischensumme:"));
        assert!(html.contains("GESAMT:"));
    }

    #[test]
    fn test_product_names_are_escaped() {
        let mut order = order(None, None);
        order.items[0].product.name = "<script>alert('x')</script>".to_string();
        let html = ReceiptRenderer::new(&order, labels()).render();
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("a & b"), "a &amp; b");
        assert_eq!(escape_html("<i>\"x\"</i>"), "&lt;i&gt;&quot;x&quot;&lt;/i&gt;");
        assert_eq!(escape_html("plain"), "plain");
    }

    #[test]
    fn test_short_id_handles_short_input() {
        assert_eq!(short_id("abc"), "abc");
        assert_eq!(short_id("0123456789"), "01234567");
    }
}

// benches/parse.rs
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use market_lens::core::sanitize::parse_price;
use market_lens::specs;

fn offers_page(n: usize) -> String {
    let mut page = String::from("<html><body>");
    for i in 0..n {
        page.push_str(&format!(
            r#"<div class="item">
                 <div class="category"><a href="/c/1">Drugs</a> » <a href="/c/2">Cannabis</a> » <a href="/c/3">Weed</a></div>
                 <a class="title" href="/items/{i}">Offer {i}</a>
                 <span class="Price">USD {},{:03}.50</span>
                 <span class="shipping-from">Ships from: Germany</span>
                 <span class="shipping-to">Ships to: Worldwide</span>
               </div>"#,
            1 + i % 9,
            i % 1000
        ));
    }
    page.push_str("</body></html>");
    page
}

fn bench_prices(c: &mut Criterion) {
    let raw = ["USD 1,234.56", "1.234,56 €", "$ 30.00", "12,50", "1.250.000", "n/a"];
    c.bench_function("parse_price", |b| {
        b.iter(|| {
            for r in raw {
                black_box(parse_price(black_box(r)));
            }
        })
    });
}

fn bench_offers(c: &mut Criterion) {
    let page = offers_page(200);
    c.bench_function("offers_extract_200", |b| {
        b.iter(|| {
            let offers = specs::offers::extract(black_box(&page), "acme");
            black_box(offers.len())
        })
    });
}

criterion_group!(benches, bench_prices, bench_offers);
criterion_main!(benches);

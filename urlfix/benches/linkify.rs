#![allow(
  clippy::expect_used,
  clippy::unwrap_used,
  reason = "Fine in benchmarks"
)]
use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use urlfix::{LinkifyOptionsBuilder, UrlLinkifier};

// Self-contained sample fragments so the benchmark needs no fixture files.
const NO_URLS: &str = r"<p>A perfectly ordinary paragraph with <strong>bold</strong>
and <em>emphasis</em> but nothing resembling a link in sight. More prose
follows, and then some more, because rendered wiki pages are rarely short.</p>
<ul><li>one item</li><li>another item</li><li>a third item</li></ul>";

const FEW_URLS: &str = "<p>Check https://example.com\u{2014}test and also
www.example.org/path for details. An existing link:
<a href=\"http://old.example.com\u{2026}page\">the old page</a>.</p>";

const MANY_URLS: &str = r#"<h2>Weekly links</h2>
<p>Start with https://one.example.com/a—b then www.two.example.com/c…d and
bare three.example.com/e?f=1 plus (https://four.example.com/g) and
<a href="https://five.example.com">https://five.example.com</a><em>/h—i</em>
with trailing text.</p>
<p>Second paragraph: https://six.example.com/j, www.seven.example.com/k!
And a repaired one: <a href="http://eight.example.com—l">label</a>.</p>
<pre>code block with https://nine.example.com—m that must stay put</pre>
<p>Closing thoughts at ten.example.com/n#frag and https://eleven.example.com.</p>"#;

fn bench_linkify(c: &mut Criterion) {
  let mut group = c.benchmark_group("linkify");

  let default = UrlLinkifier::default();
  let no_sniff =
    UrlLinkifier::new(LinkifyOptionsBuilder::new().sniff(false).build());

  for (name, html) in
    [("no_urls", NO_URLS), ("few_urls", FEW_URLS), ("many_urls", MANY_URLS)]
  {
    group.bench_with_input(
      BenchmarkId::new("default", name),
      &html,
      |b, html| {
        b.iter(|| default.linkify(black_box(html)));
      },
    );

    group.bench_with_input(
      BenchmarkId::new("no_sniff", name),
      &html,
      |b, html| {
        b.iter(|| no_sniff.linkify(black_box(html)));
      },
    );
  }

  group.finish();
}

criterion_group!(benches, bench_linkify);
criterion_main!(benches);

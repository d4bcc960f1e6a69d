//! Benchmarks for the delimiter matcher.
//!
//! Run with: `cargo bench -p surround-lib --bench matcher`

use std::num::NonZeroUsize;

use divan::{
  Bencher,
  black_box,
};
use surround_lib::{
  buffer::TextBuffer,
  matcher::find_corresponding,
  pair::Pair,
  position::Position,
};

fn main() {
  divan::main();
}

#[divan::bench(args = [8, 64, 512])]
fn nested_single_row(bencher: Bencher, depth: usize) {
  let text = format!("{}x{}", "(".repeat(depth), ")".repeat(depth));
  let buffer = TextBuffer::from(text.as_str());
  let pair = Pair::lookup('(').unwrap();
  let start = Position::at(NonZeroUsize::MIN, 1);

  bencher.bench(|| find_corresponding(black_box(&buffer), pair, start).unwrap());
}

#[divan::bench(args = [16, 256, 4096])]
fn block_over_many_rows(bencher: Bencher, rows: usize) {
  let mut text = String::from("fn main() {\n");
  for row in 0..rows {
    if row % 4 == 0 {
      text.push('\n');
    } else {
      text.push_str("  let x = { (1, [2]) };\n");
    }
  }
  text.push_str("}\n");
  let buffer = TextBuffer::from(text.as_str());
  let pair = Pair::lookup('{').unwrap();
  let start = Position::at(NonZeroUsize::MIN, 11);

  bencher.bench(|| find_corresponding(black_box(&buffer), pair, start).unwrap());
}

#[divan::bench]
fn quote_on_long_row(bencher: Bencher) {
  let text = format!("'{}'", "a".repeat(4096));
  let buffer = TextBuffer::from(text.as_str());
  let pair = Pair::lookup('\'').unwrap();
  let start = Position::at(NonZeroUsize::MIN, 1);

  bencher.bench(|| find_corresponding(black_box(&buffer), pair, start).unwrap());
}

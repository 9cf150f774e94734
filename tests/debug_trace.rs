use std::{
    io,
    sync::{Arc, Mutex},
};

use tracing::Level;

use hocr_title::{Parser, ParserConfig};

#[derive(Clone, Default)]
struct CapturedOutput(Arc<Mutex<Vec<u8>>>);

impl io::Write for CapturedOutput {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl CapturedOutput {
    fn text(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

// DEBUG 以上のイベントをすべて拾う subscriber の下で f を実行する
fn capture<T>(f: impl FnOnce() -> T) -> (T, String) {
    let output = CapturedOutput::default();
    let writer = output.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(Level::DEBUG)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();

    let ret = tracing::subscriber::with_default(subscriber, f);
    (ret, output.text())
}

fn debug_parser() -> Parser {
    Parser::new(ParserConfig {
        debug: true,
        ..ParserConfig::default()
    })
}

#[test]
fn test_debug_traces_tokens_and_map() {
    let (ret, output) = capture(|| debug_parser().parse("bbox 0 0 10 20; x_wconf 93"));

    assert!(ret.is_ok());
    assert!(output.contains("tokenize"), "{}", output);
    assert!(output.contains("bbox 0 0 10 20; x_wconf 93"), "{}", output);
    assert!(output.contains("propertyMap"), "{}", output);
    assert!(!output.contains("Parse error"), "{}", output);
}

#[test]
fn test_debug_traces_failing_title() {
    let (ret, output) = capture(|| debug_parser().parse("bbox 0 0 10 20; bogus 1"));

    assert!(ret.is_err());
    assert!(output.contains("tokenize"), "{}", output);
    assert!(
        output.contains("Parse error in 'bbox 0 0 10 20; bogus 1'"),
        "{}",
        output
    );
    assert!(output.contains("Unknown property 'bogus'"), "{}", output);
    // 失敗したときは結果の map を出さない
    assert!(!output.contains("propertyMap"), "{}", output);
}

#[test]
fn test_no_traces_without_debug() {
    let parser = Parser::default();
    let (ret, output) = capture(|| {
        let ok = parser.parse("bbox 0 0 10 20");
        let err = parser.parse("bogus 1");
        (ok, err)
    });

    assert!(ret.0.is_ok());
    assert!(ret.1.is_err());
    assert_eq!(output, "");
}

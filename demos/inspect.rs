// 打印 GeoTIFF 文件的 TIFF 标签、GeoKey 和坐标系分类结果
use geokey_crs::tiff::TagId;
use geokey_crs::{GeoKeyDecoder, Tiff};
use std::env;
use std::fs::File;
use std::io::{BufReader, Seek, SeekFrom};

const SAMPLE_TIFF: &str = "data/sample.tif";

fn main() {
    // 设置日志级别为 DEBUG，显示目录头和分类过程
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("Example: geokey-crs inspect");

    let args: Vec<String> = env::args().chain(vec![SAMPLE_TIFF.to_string()]).collect();
    let path = &args[1];

    println!("Opening `{path}`");
    let file = File::open(path).unwrap();
    let reader = &mut BufReader::new(file);

    let tiff = Tiff::open(reader).unwrap();
    println!("{tiff}");

    let decoder = GeoKeyDecoder::new();
    let ifd0 = tiff.ifd0().unwrap();
    if let Ok(raw) = ifd0.get_tag_values::<u16>(TagId::GeoKeyDirectory) {
        let doubles = ifd0.get_tag_values::<f64>(TagId::GeoDoubleParams).ok();
        let ascii = ifd0.get_tag_bytes(TagId::GeoAsciiParams).ok();
        let keys = decoder.resolve_keys(&raw, doubles.as_deref(), ascii);
        println!("{keys}");
    }

    reader.seek(SeekFrom::Start(0)).unwrap();
    let crs = decoder.decode_tiff(reader).unwrap();
    println!("Coordinate system: {crs}");
    match crs.proj_string() {
        Some(proj) => println!("proj4: {proj}"),
        None => println!("proj4: (none)"),
    }
}

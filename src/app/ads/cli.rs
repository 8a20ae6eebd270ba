//! 命令行广告查询

use std::io::{self, BufRead, Write};

use super::service::AdService;

/// 打印广告列表，提示输入 id 并显示查询结果
pub fn run_lookup<R, W>(service: &AdService, mut input: R, mut output: W) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    let listing = service.list_ads();
    writeln!(output, "Ad listing:")?;
    for ad in &listing {
        writeln!(output, "  {} | {} | {} | {}", ad.id, ad.title, ad.price, ad.date.to_rfc3339())?;
    }
    writeln!(output, "Ad listing size: {}", listing.len())?;

    writeln!(output, "Search ad by id:")?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    let id = line.trim();

    match service.get_ad(id) {
        Ok(ad) => writeln!(
            output,
            "Ad: {} | {} | {} | {} | {}",
            ad.id,
            ad.title,
            ad.description,
            ad.price,
            ad.date.to_rfc3339()
        ),
        Err(_) => writeln!(output, "Ad not found"),
    }
}

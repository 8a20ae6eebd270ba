//! 初始广告目录

use tracing::{info, warn};

use super::{model::NewAd, service::AdService};

const INITIAL_CATALOG: [(&str, u32); 6] = [
    ("Title 1", 28),
    ("Title 2", 50),
    ("Title 3", 17),
    ("Title 4", 21),
    ("Title 5", 99),
    ("Title 6", 5),
];

/// 写入示例广告，返回成功创建的数量；已存在的标题会被跳过
pub fn seed_initial_catalog(service: &AdService) -> usize {
    let mut created = 0;
    for (title, price) in INITIAL_CATALOG {
        match service.create_ad(NewAd::new(title, "No description", price)) {
            Ok(_) => created += 1,
            Err(err) => warn!(title, error = %err, "skipping catalog entry"),
        }
    }
    info!(created, "initial ad catalog seeded");
    created
}

//! 广告存储
//!
//! 以 id 为键的内存存储，读写通过 `RwLock` 串行化。

use std::{
    collections::HashMap,
    sync::{PoisonError, RwLock},
};

use super::model::Ad;

/// 列表接口返回的最大广告数
pub const SAMPLE_CAP: usize = 5;

/// 存储层 trait
pub trait AdStore: Send + Sync {
    /// 按 id 写入，已存在时覆盖，返回存储后的值
    fn insert(&self, ad: Ad) -> Ad;

    fn find_by_id(&self, id: &str) -> Option<Ad>;

    /// 标题完全匹配（区分大小写）的所有广告
    fn find_by_title(&self, title: &str) -> Vec<Ad>;

    /// 最多返回 `limit` 条，按创建时间升序，时间相同时按 id 排序
    fn list_sample(&self, limit: usize) -> Vec<Ad>;
}

#[derive(Debug, Default)]
pub struct InMemoryAdStore {
    ads: RwLock<HashMap<String, Ad>>,
}

impl InMemoryAdStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.ads.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl AdStore for InMemoryAdStore {
    fn insert(&self, ad: Ad) -> Ad {
        // 单次 HashMap::insert，写锁中毒时数据仍完整
        let mut ads = self.ads.write().unwrap_or_else(PoisonError::into_inner);
        ads.insert(ad.id.clone(), ad.clone());
        ad
    }

    fn find_by_id(&self, id: &str) -> Option<Ad> {
        let ads = self.ads.read().unwrap_or_else(PoisonError::into_inner);
        ads.get(id).cloned()
    }

    fn find_by_title(&self, title: &str) -> Vec<Ad> {
        let ads = self.ads.read().unwrap_or_else(PoisonError::into_inner);
        ads.values().filter(|ad| ad.title == title).cloned().collect()
    }

    fn list_sample(&self, limit: usize) -> Vec<Ad> {
        let ads = self.ads.read().unwrap_or_else(PoisonError::into_inner);
        let mut sample: Vec<&Ad> = ads.values().collect();
        sample.sort_by(|a, b| {
            a.created_at
                .cmp(&b.created_at)
                .then_with(|| a.id.cmp(&b.id))
        });
        sample.into_iter().take(limit).cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use std::{sync::Arc, thread};

    fn ad(id: &str, title: &str, price: u32) -> Ad {
        Ad {
            id: id.to_string(),
            title: title.to_string(),
            description: format!("Description {}", id),
            price,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_insert_returns_stored_value() {
        let store = InMemoryAdStore::new();
        let input = ad("1", "Title 1", 50);

        let returned = store.insert(input.clone());

        assert_eq!(returned, input);
        assert_eq!(store.len(), 1);
        assert_eq!(store.find_by_id("1"), Some(input));
    }

    #[test]
    fn test_insert_keeps_empty_description() {
        let store = InMemoryAdStore::new();
        let mut input = ad("2", "Title 2", 25);
        input.description = String::new();

        store.insert(input);

        assert_eq!(store.find_by_id("2").map(|ad| ad.description), Some(String::new()));
    }

    #[test]
    fn test_insert_same_id_replaces() {
        let store = InMemoryAdStore::new();
        store.insert(ad("1", "Title 1", 50));
        store.insert(ad("1", "Title 1 bis", 60));

        assert_eq!(store.len(), 1);
        let stored = store.find_by_id("1").unwrap();
        assert_eq!(stored.title, "Title 1 bis");
        assert_eq!(stored.price, 60);
    }

    #[test]
    fn test_find_by_id_missing_is_none() {
        let store = InMemoryAdStore::new();
        store.insert(ad("1", "Title 1", 50));

        assert_eq!(store.find_by_id("6"), None);
    }

    #[test]
    fn test_find_by_title_is_exact_and_case_sensitive() {
        let store = InMemoryAdStore::new();
        store.insert(ad("1", "Bike", 50));
        store.insert(ad("2", "Bike helmet", 19));

        assert_eq!(store.find_by_title("Bike").len(), 1);
        assert!(store.find_by_title("bike").is_empty());
        assert!(store.find_by_title("Car").is_empty());
    }

    #[test]
    fn test_list_sample_is_capped() {
        let store = InMemoryAdStore::new();
        for i in 0..8 {
            store.insert(ad(&i.to_string(), &format!("Title {}", i), i));
        }

        assert_eq!(store.list_sample(SAMPLE_CAP).len(), SAMPLE_CAP);
        assert_eq!(store.list_sample(3).len(), 3);
        assert_eq!(store.list_sample(100).len(), 8);
    }

    #[test]
    fn test_list_sample_empty_store() {
        let store = InMemoryAdStore::new();
        assert!(store.list_sample(SAMPLE_CAP).is_empty());
    }

    #[test]
    fn test_list_sample_orders_by_creation_time() {
        let store = InMemoryAdStore::new();
        let now = Utc::now();
        let mut newer = ad("a", "Newer", 1);
        newer.created_at = now;
        let mut older = ad("b", "Older", 2);
        older.created_at = now - Duration::seconds(10);
        store.insert(newer);
        store.insert(older);

        let titles: Vec<String> = store
            .list_sample(SAMPLE_CAP)
            .into_iter()
            .map(|ad| ad.title)
            .collect();
        assert_eq!(titles, vec!["Older", "Newer"]);
    }

    #[test]
    fn test_concurrent_inserts_are_not_lost() {
        let store = Arc::new(InMemoryAdStore::new());
        let handles: Vec<_> = (0..4)
            .map(|t| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    for i in 0..250 {
                        let id = format!("{}-{}", t, i);
                        store.insert(ad(&id, &id, i));
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(store.len(), 1000);
    }
}

// ==========================================
// 工程组织产能规划系统 - 规划文档仓储
// ==========================================
// 职责: 规划文档的不透明 JSON blob 持久化 (KV 表,每槽位一行)
// 红线: 引擎不触碰仓储;只有宿主/CLI 负责读写与触发重算
// ==========================================

use crate::domain::document::PlanningDocument;
use crate::repository::error::{RepositoryError, RepositoryResult};
use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension};
use std::sync::{Arc, Mutex};
use tracing::info;
use uuid::Uuid;

/// 默认文档槽位
pub const DEFAULT_SLOT: &str = "default";

/// 一次保存产生的修订信息
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentRevision {
    pub revision_id: String,
    pub saved_at: DateTime<Utc>,
}

// ==========================================
// DocumentRepository - 文档仓储
// ==========================================
pub struct DocumentRepository {
    conn: Arc<Mutex<Connection>>,
}

impl DocumentRepository {
    /// 打开/创建数据库并初始化 KV 表
    pub fn new(db_path: &str) -> RepositoryResult<Self> {
        let conn = crate::db::open_sqlite_connection(db_path)
            .map_err(|e| RepositoryError::DatabaseConnectionError(e.to_string()))?;
        let repo = Self {
            conn: Arc::new(Mutex::new(conn)),
        };
        repo.init_schema()?;
        Ok(repo)
    }

    /// 从已有连接创建 (连接上的 PRAGMA 由调用方保证)
    pub fn from_connection(conn: Arc<Mutex<Connection>>) -> RepositoryResult<Self> {
        let repo = Self { conn };
        repo.init_schema()?;
        Ok(repo)
    }

    fn init_schema(&self) -> RepositoryResult<()> {
        let conn = self.lock_conn()?;
        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS document_kv (
                slot        TEXT PRIMARY KEY,
                revision_id TEXT NOT NULL,
                saved_at    TEXT NOT NULL,
                blob        TEXT NOT NULL
            );",
        )?;
        Ok(())
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 保存文档到指定槽位 (覆盖写,每次生成新修订号)
    pub fn save_document(
        &self,
        slot: &str,
        document: &PlanningDocument,
    ) -> RepositoryResult<DocumentRevision> {
        let blob = serde_json::to_string(document)?;
        let revision = DocumentRevision {
            revision_id: Uuid::new_v4().to_string(),
            saved_at: Utc::now(),
        };

        let conn = self.lock_conn()?;
        conn.execute(
            "INSERT INTO document_kv (slot, revision_id, saved_at, blob)
             VALUES (?1, ?2, ?3, ?4)
             ON CONFLICT(slot) DO UPDATE SET
                 revision_id = excluded.revision_id,
                 saved_at = excluded.saved_at,
                 blob = excluded.blob",
            params![
                slot,
                revision.revision_id,
                revision.saved_at.to_rfc3339(),
                blob
            ],
        )?;

        info!(slot, revision_id = %revision.revision_id, "规划文档已保存");
        Ok(revision)
    }

    /// 读取指定槽位的文档
    ///
    /// # 返回
    /// - `NotFound`: 槽位不存在
    /// - `CorruptDocument`: blob 无法反序列化
    pub fn load_document(&self, slot: &str) -> RepositoryResult<PlanningDocument> {
        let blob = {
            let conn = self.lock_conn()?;
            conn.query_row(
                "SELECT blob FROM document_kv WHERE slot = ?1",
                params![slot],
                |row| row.get::<_, String>(0),
            )
            .optional()?
        };

        match blob {
            Some(blob) => Ok(serde_json::from_str(&blob)?),
            None => Err(RepositoryError::NotFound {
                entity: "PlanningDocument".to_string(),
                id: slot.to_string(),
            }),
        }
    }

    /// 读取槽位的修订信息 (不解码 blob)
    pub fn load_revision(&self, slot: &str) -> RepositoryResult<Option<DocumentRevision>> {
        let conn = self.lock_conn()?;
        let row = conn
            .query_row(
                "SELECT revision_id, saved_at FROM document_kv WHERE slot = ?1",
                params![slot],
                |row| {
                    Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
                },
            )
            .optional()?;

        match row {
            Some((revision_id, saved_at)) => {
                let saved_at = DateTime::parse_from_rfc3339(&saved_at)
                    .map_err(|e| RepositoryError::CorruptDocument(e.to_string()))?
                    .with_timezone(&Utc);
                Ok(Some(DocumentRevision {
                    revision_id,
                    saved_at,
                }))
            }
            None => Ok(None),
        }
    }

    /// 列出所有槽位
    pub fn list_slots(&self) -> RepositoryResult<Vec<String>> {
        let conn = self.lock_conn()?;
        let mut stmt = conn.prepare("SELECT slot FROM document_kv ORDER BY slot")?;
        let slots = stmt
            .query_map([], |row| row.get::<_, String>(0))?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(slots)
    }

    /// 删除槽位
    ///
    /// # 返回
    /// 是否真的删除了一行
    pub fn delete_document(&self, slot: &str) -> RepositoryResult<bool> {
        let conn = self.lock_conn()?;
        let affected = conn.execute("DELETE FROM document_kv WHERE slot = ?1", params![slot])?;
        Ok(affected > 0)
    }

    fn lock_conn(&self) -> RepositoryResult<std::sync::MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))
    }
}

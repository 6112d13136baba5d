//! [`SqliteStore`] — the SQLite implementation of [`TastingStore`].

use std::path::Path;

use chrono::Utc;
use rusqlite::OptionalExtension as _;
use taste_core::{
  curated::CuratedReview,
  store::TastingStore,
  subject::{Subject, SubjectId},
  tasting::TastingRecord,
};

use crate::{
  Result,
  encode::{RawCurated, RawSubject, RawTasting, encode_date, encode_dt},
  schema::SCHEMA,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A tasting log backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}

// ─── TastingStore impl ───────────────────────────────────────────────────────

impl TastingStore for SqliteStore {
  type Error = crate::Error;

  // ── Subjects ──────────────────────────────────────────────────────────────

  async fn get_subject(&self, id: &SubjectId) -> Result<Option<Subject>> {
    let id_str = id.as_str().to_owned();

    let raw: Option<RawSubject> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              "SELECT subject_id, created_at FROM subjects WHERE subject_id = ?1",
              rusqlite::params![id_str],
              |row| {
                Ok(RawSubject {
                  subject_id: row.get(0)?,
                  created_at: row.get(1)?,
                })
              },
            )
            .optional()?,
        )
      })
      .await?;

    raw.map(RawSubject::into_subject).transpose()
  }

  async fn add_subject(&self, id: SubjectId) -> Result<Subject> {
    let subject = Subject { subject_id: id, created_at: Utc::now() };

    let id_str = subject.subject_id.as_str().to_owned();
    let at_str = encode_dt(subject.created_at);

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO subjects (subject_id, created_at) VALUES (?1, ?2)",
          rusqlite::params![id_str, at_str],
        )?;
        Ok(())
      })
      .await?;

    Ok(subject)
  }

  // ── Tastings ──────────────────────────────────────────────────────────────

  async fn find_tasting(
    &self,
    _subject_id: &SubjectId,
    review_id: &str,
  ) -> Result<Option<TastingRecord>> {
    // The table is shared across all users; the derived identifier is the
    // key, so the lookup filters on it alone.
    let review_id = review_id.to_owned();

    let raw: Option<RawTasting> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              "SELECT review_id, subject_id, date, distillery, bourbon_name,
                      proof, notes, single_barrel
               FROM tastings WHERE review_id = ?1",
              rusqlite::params![review_id],
              |row| {
                Ok(RawTasting {
                  review_id:     row.get(0)?,
                  subject_id:    row.get(1)?,
                  date:          row.get(2)?,
                  distillery:    row.get(3)?,
                  bourbon_name:  row.get(4)?,
                  proof:         row.get(5)?,
                  notes:         row.get(6)?,
                  single_barrel: row.get(7)?,
                })
              },
            )
            .optional()?,
        )
      })
      .await?;

    raw.map(RawTasting::into_record).transpose()
  }

  async fn insert_tasting(&self, record: &TastingRecord) -> Result<()> {
    let review_id     = record.review_id.clone();
    let subject_id    = record.subject_id.as_str().to_owned();
    let date_str      = encode_date(record.date);
    let distillery    = record.distillery.clone();
    let bourbon_name  = record.bourbon_name.clone();
    let proof         = record.proof;
    let notes         = record.notes.clone();
    let single_barrel = record.single_barrel as i64;

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO tastings (
             review_id, subject_id, date, distillery, bourbon_name,
             proof, notes, single_barrel
           ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
          rusqlite::params![
            review_id,
            subject_id,
            date_str,
            distillery,
            bourbon_name,
            proof,
            notes,
            single_barrel,
          ],
        )?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  async fn update_tasting(&self, record: &TastingRecord) -> Result<()> {
    let review_id     = record.review_id.clone();
    let subject_id    = record.subject_id.as_str().to_owned();
    let date_str      = encode_date(record.date);
    let distillery    = record.distillery.clone();
    let bourbon_name  = record.bourbon_name.clone();
    let proof         = record.proof;
    let notes         = record.notes.clone();
    let single_barrel = record.single_barrel as i64;

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "UPDATE tastings SET
             subject_id = ?2, date = ?3, distillery = ?4, bourbon_name = ?5,
             proof = ?6, notes = ?7, single_barrel = ?8
           WHERE review_id = ?1",
          rusqlite::params![
            review_id,
            subject_id,
            date_str,
            distillery,
            bourbon_name,
            proof,
            notes,
            single_barrel,
          ],
        )?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  async fn list_tastings(&self, subject_id: &SubjectId) -> Result<Vec<TastingRecord>> {
    let subject_id = subject_id.as_str().to_owned();

    let raws: Vec<RawTasting> = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(
          "SELECT review_id, subject_id, date, distillery, bourbon_name,
                  proof, notes, single_barrel
           FROM tastings
           WHERE subject_id = ?1
           ORDER BY date DESC",
        )?;

        let rows = stmt
          .query_map(rusqlite::params![subject_id], |row| {
            Ok(RawTasting {
              review_id:     row.get(0)?,
              subject_id:    row.get(1)?,
              date:          row.get(2)?,
              distillery:    row.get(3)?,
              bourbon_name:  row.get(4)?,
              proof:         row.get(5)?,
              notes:         row.get(6)?,
              single_barrel: row.get(7)?,
            })
          })?
          .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawTasting::into_record).collect()
  }

  // ── Curated reviews ───────────────────────────────────────────────────────

  async fn find_curated(&self, curated_id: &str) -> Result<Option<CuratedReview>> {
    let curated_id = curated_id.to_owned();

    let raw: Option<RawCurated> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              "SELECT curated_id, bourbon_name, distillery, proof,
                      review_text, url, single_barrel
               FROM curated_reviews WHERE curated_id = ?1",
              rusqlite::params![curated_id],
              |row| {
                Ok(RawCurated {
                  curated_id:    row.get(0)?,
                  bourbon_name:  row.get(1)?,
                  distillery:    row.get(2)?,
                  proof:         row.get(3)?,
                  review_text:   row.get(4)?,
                  url:           row.get(5)?,
                  single_barrel: row.get(6)?,
                })
              },
            )
            .optional()?,
        )
      })
      .await?;

    Ok(raw.map(RawCurated::into_review))
  }

  async fn insert_curated(&self, review: &CuratedReview) -> Result<()> {
    let curated_id    = review.curated_id.clone();
    let bourbon_name  = review.bourbon_name.clone();
    let distillery    = review.distillery.clone();
    let proof         = review.proof;
    let review_text   = review.review_text.clone();
    let url           = review.url.clone();
    let single_barrel = review.single_barrel as i64;

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO curated_reviews (
             curated_id, bourbon_name, distillery, proof,
             review_text, url, single_barrel
           ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
          rusqlite::params![
            curated_id,
            bourbon_name,
            distillery,
            proof,
            review_text,
            url,
            single_barrel,
          ],
        )?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}

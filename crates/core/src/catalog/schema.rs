use rusqlite::Connection;

use crate::error::Result;

pub fn initialize(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS performers (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            name        TEXT NOT NULL UNIQUE,
            created_at  INTEGER NOT NULL
        );

        CREATE TABLE IF NOT EXISTS tags (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            name        TEXT NOT NULL UNIQUE,
            created_at  INTEGER NOT NULL
        );

        CREATE TABLE IF NOT EXISTS studios (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            name        TEXT NOT NULL UNIQUE,
            created_at  INTEGER NOT NULL
        );

        CREATE TABLE IF NOT EXISTS scenes (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            path        TEXT NOT NULL UNIQUE,
            organized   INTEGER NOT NULL DEFAULT 0,
            created_at  INTEGER NOT NULL
        );

        CREATE TABLE IF NOT EXISTS images (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            path        TEXT NOT NULL UNIQUE,
            organized   INTEGER NOT NULL DEFAULT 0,
            created_at  INTEGER NOT NULL
        );

        CREATE TABLE IF NOT EXISTS galleries (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            path        TEXT NOT NULL UNIQUE,
            organized   INTEGER NOT NULL DEFAULT 0,
            created_at  INTEGER NOT NULL
        );

        CREATE TABLE IF NOT EXISTS scene_performers (
            scene_id     INTEGER NOT NULL REFERENCES scenes(id),
            performer_id INTEGER NOT NULL REFERENCES performers(id),
            PRIMARY KEY (scene_id, performer_id)
        );

        CREATE TABLE IF NOT EXISTS scene_tags (
            scene_id    INTEGER NOT NULL REFERENCES scenes(id),
            tag_id      INTEGER NOT NULL REFERENCES tags(id),
            PRIMARY KEY (scene_id, tag_id)
        );

        CREATE TABLE IF NOT EXISTS scene_studios (
            scene_id    INTEGER NOT NULL REFERENCES scenes(id),
            studio_id   INTEGER NOT NULL REFERENCES studios(id),
            PRIMARY KEY (scene_id, studio_id)
        );

        CREATE TABLE IF NOT EXISTS image_performers (
            image_id     INTEGER NOT NULL REFERENCES images(id),
            performer_id INTEGER NOT NULL REFERENCES performers(id),
            PRIMARY KEY (image_id, performer_id)
        );

        CREATE TABLE IF NOT EXISTS image_tags (
            image_id    INTEGER NOT NULL REFERENCES images(id),
            tag_id      INTEGER NOT NULL REFERENCES tags(id),
            PRIMARY KEY (image_id, tag_id)
        );

        CREATE TABLE IF NOT EXISTS image_studios (
            image_id    INTEGER NOT NULL REFERENCES images(id),
            studio_id   INTEGER NOT NULL REFERENCES studios(id),
            PRIMARY KEY (image_id, studio_id)
        );

        CREATE TABLE IF NOT EXISTS gallery_performers (
            gallery_id   INTEGER NOT NULL REFERENCES galleries(id),
            performer_id INTEGER NOT NULL REFERENCES performers(id),
            PRIMARY KEY (gallery_id, performer_id)
        );

        CREATE TABLE IF NOT EXISTS gallery_tags (
            gallery_id  INTEGER NOT NULL REFERENCES galleries(id),
            tag_id      INTEGER NOT NULL REFERENCES tags(id),
            PRIMARY KEY (gallery_id, tag_id)
        );

        CREATE TABLE IF NOT EXISTS gallery_studios (
            gallery_id  INTEGER NOT NULL REFERENCES galleries(id),
            studio_id   INTEGER NOT NULL REFERENCES studios(id),
            PRIMARY KEY (gallery_id, studio_id)
        );

        CREATE INDEX IF NOT EXISTS idx_scenes_organized ON scenes(organized);
        CREATE INDEX IF NOT EXISTS idx_images_organized ON images(organized);
        CREATE INDEX IF NOT EXISTS idx_galleries_organized ON galleries(organized);
        ",
    )?;
    Ok(())
}

use diesel::prelude::*;

use crate::{
    domain::article::{
        Article as DomainArticle, ArticleListQuery, NewArticle as DomainNewArticle,
        UpdateArticle as DomainUpdateArticle,
    },
    models::article::{
        Article as DbArticle, NewArticle as DbNewArticle, UpdateArticle as DbUpdateArticle,
    },
    repository::{
        ArticleReader, ArticleWriter, DieselRepository,
        errors::{RepositoryError, RepositoryResult},
        like_pattern,
    },
};

impl ArticleReader for DieselRepository {
    fn get_article_by_id(&self, id: i32) -> RepositoryResult<Option<DomainArticle>> {
        use crate::schema::articles;

        let mut conn = self.conn()?;
        let article = articles::table
            .filter(articles::id.eq(id))
            .first::<DbArticle>(&mut conn)
            .optional()?;

        article.map(TryInto::try_into).transpose()
    }

    fn list_articles(&self, query: ArticleListQuery) -> RepositoryResult<Vec<DomainArticle>> {
        use crate::schema::articles;

        let mut conn = self.conn()?;

        let mut items = articles::table.into_boxed::<diesel::sqlite::Sqlite>();

        if let Some(term) = query.search.as_ref() {
            let pattern = like_pattern(term);
            items = items.filter(
                articles::title
                    .like(pattern.clone())
                    .or(articles::summary.like(pattern)),
            );
        }

        if let Some(status) = query.status {
            items = items.filter(articles::status.eq(status.as_str()));
        }

        if let Some(editorial_number_id) = query.editorial_number_id {
            items = items.filter(articles::editorial_number_id.eq(editorial_number_id));
        }

        if let Some(author_id) = query.author_id {
            items = items.filter(articles::author_id.eq(author_id));
        }

        if let Some(reviewer_id) = query.reviewer_id {
            items = items.filter(articles::reviewer_id.eq(reviewer_id));
        }

        if let Some(thematic_line_id) = query.thematic_line_id {
            items = items.filter(articles::thematic_line_id.eq(thematic_line_id));
        }

        if let Some(language_id) = query.language_id {
            items = items.filter(articles::language_id.eq(language_id));
        }

        let rows = items
            .order((articles::submitted_on.desc(), articles::id.desc()))
            .load::<DbArticle>(&mut conn)?;

        rows.into_iter().map(TryInto::try_into).collect()
    }
}

impl ArticleWriter for DieselRepository {
    fn create_article(&self, new_article: &DomainNewArticle) -> RepositoryResult<DomainArticle> {
        use crate::schema::articles;

        let mut conn = self.conn()?;
        let db_new = DbNewArticle::from(new_article);

        let created = diesel::insert_into(articles::table)
            .values(&db_new)
            .get_result::<DbArticle>(&mut conn)?;

        created.try_into()
    }

    fn update_article(
        &self,
        article_id: i32,
        updates: &DomainUpdateArticle,
    ) -> RepositoryResult<DomainArticle> {
        use crate::schema::articles;

        let mut conn = self.conn()?;
        let db_updates = DbUpdateArticle::from(updates);

        let updated = diesel::update(articles::table.filter(articles::id.eq(article_id)))
            .set(&db_updates)
            .get_result::<DbArticle>(&mut conn)?;

        updated.try_into()
    }

    fn delete_article(&self, article_id: i32) -> RepositoryResult<()> {
        use crate::schema::articles;

        let mut conn = self.conn()?;

        let deleted = diesel::delete(articles::table.filter(articles::id.eq(article_id)))
            .execute(&mut conn)?;
        if deleted == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}

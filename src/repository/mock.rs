use mockall::mock;

use super::{
    ArticleReader, ArticleWriter, EditorialNumberReader, EditorialNumberWriter, LanguageReader,
    LanguageWriter, ResearcherReader, ResearcherWriter, ThematicLineReader, ThematicLineWriter,
    UserReader, UserWriter,
};
use crate::domain::{
    article::{Article, ArticleListQuery, NewArticle, UpdateArticle},
    editorial_number::{
        EditorialNumber, EditorialNumberListQuery, NewEditorialNumber, UpdateEditorialNumber,
    },
    language::{Language, NewLanguage},
    researcher::{NewResearcher, Researcher, ResearcherListQuery, UpdateResearcher},
    thematic_line::{NewThematicLine, ThematicLine, ThematicLineListQuery, UpdateThematicLine},
    user::{NewUser, UpdateUser, User, UserListQuery},
};
use crate::repository::errors::RepositoryResult;

mock! {
    pub UserRepository {}

    impl UserReader for UserRepository {
        fn get_user_by_id(&self, id: i32) -> RepositoryResult<Option<User>>;
        fn get_user_by_email(&self, email: &str) -> RepositoryResult<Option<User>>;
        fn list_users(&self, query: UserListQuery) -> RepositoryResult<Vec<User>>;
        fn count_users(&self) -> RepositoryResult<usize>;
    }

    impl UserWriter for UserRepository {
        fn create_user(&self, new_user: &NewUser) -> RepositoryResult<User>;
        fn update_user(&self, user_id: i32, updates: &UpdateUser) -> RepositoryResult<User>;
        fn delete_user(&self, user_id: i32) -> RepositoryResult<()>;
    }
}

mock! {
    pub EditorialNumberRepository {}

    impl EditorialNumberReader for EditorialNumberRepository {
        fn get_editorial_number_by_id(&self, id: i32) -> RepositoryResult<Option<EditorialNumber>>;
        fn list_editorial_numbers(&self, query: EditorialNumberListQuery) -> RepositoryResult<Vec<EditorialNumber>>;
    }

    impl EditorialNumberWriter for EditorialNumberRepository {
        fn create_editorial_number(&self, new_number: &NewEditorialNumber) -> RepositoryResult<EditorialNumber>;
        fn update_editorial_number(&self, number_id: i32, updates: &UpdateEditorialNumber) -> RepositoryResult<EditorialNumber>;
    }
}

mock! {
    pub ResearcherRepository {}

    impl ResearcherReader for ResearcherRepository {
        fn get_researcher_by_id(&self, id: i32) -> RepositoryResult<Option<Researcher>>;
        fn list_researchers(&self, query: ResearcherListQuery) -> RepositoryResult<Vec<Researcher>>;
        fn list_countries(&self) -> RepositoryResult<Vec<String>>;
    }

    impl ResearcherWriter for ResearcherRepository {
        fn create_researcher(&self, new_researcher: &NewResearcher) -> RepositoryResult<Researcher>;
        fn create_researchers(&self, new_researchers: &[NewResearcher]) -> RepositoryResult<usize>;
        fn update_researcher(&self, researcher_id: i32, updates: &UpdateResearcher) -> RepositoryResult<Researcher>;
        fn delete_researcher(&self, researcher_id: i32) -> RepositoryResult<()>;
    }

    impl ThematicLineReader for ResearcherRepository {
        fn get_thematic_line_by_id(&self, id: i32) -> RepositoryResult<Option<ThematicLine>>;
        fn list_thematic_lines(&self, query: ThematicLineListQuery) -> RepositoryResult<Vec<ThematicLine>>;
    }

    impl LanguageReader for ResearcherRepository {
        fn list_languages(&self) -> RepositoryResult<Vec<Language>>;
    }

    impl ArticleReader for ResearcherRepository {
        fn get_article_by_id(&self, id: i32) -> RepositoryResult<Option<Article>>;
        fn list_articles(&self, query: ArticleListQuery) -> RepositoryResult<Vec<Article>>;
    }
}

mock! {
    pub CatalogRepository {}

    impl ThematicLineReader for CatalogRepository {
        fn get_thematic_line_by_id(&self, id: i32) -> RepositoryResult<Option<ThematicLine>>;
        fn list_thematic_lines(&self, query: ThematicLineListQuery) -> RepositoryResult<Vec<ThematicLine>>;
    }

    impl ThematicLineWriter for CatalogRepository {
        fn create_thematic_line(&self, new_line: &NewThematicLine) -> RepositoryResult<ThematicLine>;
        fn update_thematic_line(&self, line_id: i32, updates: &UpdateThematicLine) -> RepositoryResult<ThematicLine>;
        fn delete_thematic_line(&self, line_id: i32) -> RepositoryResult<()>;
    }

    impl LanguageReader for CatalogRepository {
        fn list_languages(&self) -> RepositoryResult<Vec<Language>>;
    }

    impl LanguageWriter for CatalogRepository {
        fn create_language(&self, new_language: &NewLanguage) -> RepositoryResult<Language>;
        fn delete_language(&self, language_id: i32) -> RepositoryResult<()>;
    }

    impl ResearcherReader for CatalogRepository {
        fn get_researcher_by_id(&self, id: i32) -> RepositoryResult<Option<Researcher>>;
        fn list_researchers(&self, query: ResearcherListQuery) -> RepositoryResult<Vec<Researcher>>;
        fn list_countries(&self) -> RepositoryResult<Vec<String>>;
    }

    impl ArticleReader for CatalogRepository {
        fn get_article_by_id(&self, id: i32) -> RepositoryResult<Option<Article>>;
        fn list_articles(&self, query: ArticleListQuery) -> RepositoryResult<Vec<Article>>;
    }
}

mock! {
    pub ArticleRepository {}

    impl ArticleReader for ArticleRepository {
        fn get_article_by_id(&self, id: i32) -> RepositoryResult<Option<Article>>;
        fn list_articles(&self, query: ArticleListQuery) -> RepositoryResult<Vec<Article>>;
    }

    impl ArticleWriter for ArticleRepository {
        fn create_article(&self, new_article: &NewArticle) -> RepositoryResult<Article>;
        fn update_article(&self, article_id: i32, updates: &UpdateArticle) -> RepositoryResult<Article>;
        fn delete_article(&self, article_id: i32) -> RepositoryResult<()>;
    }

    impl ResearcherReader for ArticleRepository {
        fn get_researcher_by_id(&self, id: i32) -> RepositoryResult<Option<Researcher>>;
        fn list_researchers(&self, query: ResearcherListQuery) -> RepositoryResult<Vec<Researcher>>;
        fn list_countries(&self) -> RepositoryResult<Vec<String>>;
    }

    impl EditorialNumberReader for ArticleRepository {
        fn get_editorial_number_by_id(&self, id: i32) -> RepositoryResult<Option<EditorialNumber>>;
        fn list_editorial_numbers(&self, query: EditorialNumberListQuery) -> RepositoryResult<Vec<EditorialNumber>>;
    }
}

// Library API: the durable store surface — profile, saved resumes,
// cover-letter history, and ratings. Persistence here is always an explicit
// user action taken after generation; the generation core never writes to
// the database.

pub mod handlers;

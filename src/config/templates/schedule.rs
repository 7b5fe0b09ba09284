pub const STANDARD: &str = r##"{% macro authors_block(authors) %}
<div class="w-authors">
{% for author in authors %}
  <div class="w-author">
{% if author.image %}
    <img class="w-author__image" src="{{ author.image }}" alt="{{ author.name }}" />
{% endif %}
    <a class="w-author__name-link" href="/authors/{{ author.id }}/">{{ author.name }}</a>
  </div>
{% endfor %}
</div>
{% endmacro %}
<web-event-schedule>
{% if show_carousel %}
<div class="w-event-carousel">
{% for day in days %}
  <a data-index="{{ loop.index0 }}" class="w-event-carousel__day">
    <div class="w-event-carousel__thumbnail">{% if day.video_id %}<img src="https://img.youtube.com/vi/{{ day.video_id }}/maxresdefault.jpg" />{% endif %}</div>
    <div class="w-event-carousel__description">{{ day.title }}</div>
  </a>
{% endfor %}
</div>
{% endif %}
<web-tabs class="w-event-tabs unresolved" label="schedule">
{% for day in days %}
  <div data-label="{{ day.title }}" class="{% if day.is_default %}w-tabs-default{% endif %}">
    <div class="w-event-section__schedule_header">
      <web-event-time class="unresolved" datetime="{{ day.datetime }}" duration="{{ day.duration }}"></web-event-time>
    </div>
    <div class="w-event-schedule">
{% for session in day.sessions %}
      <div class="w-event-schedule__row" data-session-id="{{ session.id }}">
        <div class="w-event-schedule__cell w-event-schedule__speaker">
{{ authors_block(session.authors) }}
        </div>
        <div class="w-event-schedule__cell w-event-schedule__session">
          <a class="w-event-schedule__open" href="#{{ session.id }}">
            <span>{{ session.title }}</span>
          </a>
          <div class="w-event-schedule__blurb">
            {{ session.blurb }}
          </div>
          <div class="w-event-schedule__abstract" hidden>
{% for part in session.abstract %}
            <p>{{ part }}</p>
{% endfor %}
          </div>
        </div>
      </div>
{% endfor %}
    </div>
  </div>
{% endfor %}
</web-tabs>
</web-event-schedule>
"##;
